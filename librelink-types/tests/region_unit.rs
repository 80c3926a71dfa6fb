use librelink_types::{LibreError, Region, UnitOfMeasurement};

#[test]
fn every_region_round_trips_through_its_name() {
    assert_eq!(Region::ALL.len(), 11);
    for r in Region::ALL {
        assert_eq!(r.name().parse::<Region>().expect("known region"), r);
        assert!(r.base_url().starts_with("https://api"));
        assert!(!r.base_url().ends_with('/'));
    }
}

#[test]
fn russia_uses_its_own_domain() {
    assert_eq!(Region::Russia.base_url(), "https://api.libreview.ru");
}

#[test]
fn unknown_region_is_invalid_arg() {
    let err = "Atlantis".parse::<Region>().unwrap_err();
    assert!(matches!(err, LibreError::InvalidArg(_)));
}

#[test]
fn mmol_conversion_rounds_to_one_decimal() {
    let u = UnitOfMeasurement::MmolPerL;
    assert!((u.convert_rounded(100.0) - 5.5).abs() < 1e-9);
    assert!((u.convert_rounded(101.0) - 5.6).abs() < 1e-9);
    // 64 / 18.0182 = 3.5520 rounds up across the half step
    assert!((u.convert_rounded(64.0) - 3.6).abs() < 1e-9);
    assert!((u.convert_rounded(130.0) - 7.2).abs() < 1e-9);
    assert!((u.convert_rounded(131.0) - 7.3).abs() < 1e-9);
    assert!((u.convert_rounded(180.0) - 10.0).abs() < 1e-9);
    assert_eq!(u.suggested_display_precision(), 1);
}

#[test]
fn mg_dl_conversion_is_identity() {
    let u = UnitOfMeasurement::MgPerDl;
    assert!((u.convert_rounded(123.0) - 123.0).abs() < f64::EPSILON);
    assert_eq!(u.suggested_display_precision(), 0);
}

#[test]
fn unit_parses_from_label() {
    assert_eq!("mg/dL".parse::<UnitOfMeasurement>().unwrap(), UnitOfMeasurement::MgPerDl);
    assert_eq!("mmol/L".parse::<UnitOfMeasurement>().unwrap(), UnitOfMeasurement::MmolPerL);
    assert!("mg".parse::<UnitOfMeasurement>().is_err());
}
