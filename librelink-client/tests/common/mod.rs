#![allow(dead_code)]

use std::time::Duration;

use httpmock::prelude::*;
use librelink_client::{LibreLinkClient, LOGIN_PATH};
use serde_json::{Value, json};

pub const TOKEN: &str = "tok-123";

pub fn client(server: &MockServer) -> LibreLinkClient {
    LibreLinkClient::builder()
        .base_url(server.base_url())
        .request_timeout(Duration::from_secs(5))
        .build()
        .expect("client builds")
}

pub async fn mock_login_ok(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(200).json_body(json!({
                "status": 0,
                "data": { "authTicket": { "token": TOKEN, "expires": 1_900_000_000, "duration": 15_552_000_000_i64 } }
            }));
        })
        .await
}

pub fn patient(id: &str, first: &str) -> Value {
    json!({
        "patientId": id,
        "firstName": first,
        "lastName": "Doe",
        "targetHigh": 180,
        "targetLow": 70,
        "glucoseMeasurement": {
            "ValueInMgPerDl": 120,
            "TrendArrow": 3,
            "FactoryTimestamp": "3/5/2024 1:02:03 PM",
            "Timestamp": "3/5/2024 2:02:03 PM"
        },
        "sensor": { "a": 1_700_000_000, "pt": "ABC", "sn": "123" }
    })
}

pub fn patient_with_numeric_id(id: i64, first: &str) -> Value {
    let mut p = patient("", first);
    p["patientId"] = json!(id);
    p
}
