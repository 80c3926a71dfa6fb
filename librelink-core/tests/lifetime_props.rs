mod common;

use common::record;
use librelink_core::metrics::{activation_timestamp, expiration_timestamp, glucose_value};
use librelink_core::UnitOfMeasurement;
use proptest::prelude::*;

proptest! {
    #[test]
    fn expiration_is_activation_plus_fourteen_days(epoch in -2_000_000_000i64..4_000_000_000i64) {
        let mut rec = record("1", 100, 3);
        rec.sensor.as_mut().unwrap().a = Some(epoch);

        let activated = activation_timestamp(&rec).unwrap().unwrap();
        let expires = expiration_timestamp(&rec).unwrap().unwrap();
        prop_assert_eq!(activated.timestamp(), epoch);
        prop_assert_eq!(expires.timestamp() - epoch, 14 * 24 * 60 * 60);
    }

    #[test]
    fn glucose_value_is_deterministic(mg in 20i64..600i64) {
        let rec = record("1", mg, 3);
        for unit in UnitOfMeasurement::ALL {
            let a = glucose_value(&rec, unit);
            let b = glucose_value(&rec, unit);
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn mmol_value_has_at_most_one_decimal(mg in 20i64..600i64) {
        let rec = record("1", mg, 3);
        let v = glucose_value(&rec, UnitOfMeasurement::MmolPerL);
        prop_assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-6);
    }
}
