use librelink_core::LibreError;
use librelink_core::connector::{Authenticator, FetchOutcome, LibreConnector};
use librelink_mock::{MockConnector, OFFLINE_USER, WRONG_PASSWORD};

#[tokio::test]
async fn fixture_account_serves_sorted_patients_after_login() {
    let mock = MockConnector::new();
    let auth = mock.as_authenticator().expect("authenticator");
    let conns = mock.as_connections_provider().expect("connections");

    assert!(conns.connections().await.unwrap_err().is_auth());

    auth.login("me@example.com", "pw").await.unwrap();
    assert!(auth.is_authenticated());
    let FetchOutcome::Patients(snap) = conns.connections().await.unwrap() else {
        panic!("expected patients");
    };
    let ids: Vec<_> = snap.ids().collect();
    assert_eq!(ids, vec!["a0f9e8d7-0001", "b3a1c2d4-0002", "c7d6e5f4-0003"]);
    assert!(snap.get("c7d6e5f4-0003").unwrap().sensor.is_none());
}

#[tokio::test]
async fn fixture_account_failure_modes() {
    let mock = MockConnector::new();
    let err = mock.login("me", WRONG_PASSWORD).await.unwrap_err();
    assert_eq!(err, LibreError::Authentication);

    let err = mock.login(OFFLINE_USER, "pw").await.unwrap_err();
    assert!(matches!(err, LibreError::Connection(_)));
    assert!(!mock.is_authenticated());
}
