use pieceledger::errors::AppError;
use pieceledger::models::Amount;

#[test]
fn test_parse_accepts_common_forms() {
    assert_eq!(Amount::parse("2.50").unwrap().cents(), 250);
    assert_eq!(Amount::parse("2.5").unwrap().cents(), 250);
    assert_eq!(Amount::parse("3").unwrap().cents(), 300);
    assert_eq!(Amount::parse(" 0.05 ").unwrap().cents(), 5);
    assert_eq!(Amount::parse(".5").unwrap().cents(), 50);
    assert_eq!(Amount::parse("0").unwrap(), Amount::ZERO);
}

#[test]
fn test_parse_rejects_malformed_input() {
    for bad in ["", "abc", "-1", "+2", "1.234", "1,50", "1.2.3", ".", "2.x"] {
        let err = Amount::parse(bad).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidAmount(_)),
            "expected InvalidAmount for {bad:?}"
        );
    }
}

#[test]
fn test_display_has_two_decimals() {
    assert_eq!(Amount::from_cents(250).to_string(), "2.50");
    assert_eq!(Amount::from_cents(5).to_string(), "0.05");
    assert_eq!(Amount::from_cents(2500).to_string(), "25.00");
    assert_eq!(Amount::ZERO.to_string(), "0.00");
}

#[test]
fn test_db_values_round_to_hundredths() {
    assert_eq!(Amount::from_db(2.5).cents(), 250);
    assert_eq!(Amount::from_db(0.1 + 0.2).cents(), 30);
    assert_eq!(Amount::from_db(2.499999).cents(), 250);
    assert_eq!(Amount::from_cents(1999).to_db(), 19.99);
}

#[test]
fn test_line_value_and_sum() {
    let price = Amount::parse("2.50").unwrap();
    assert_eq!(price.times(10).unwrap().to_string(), "25.00");

    let total = Amount::total([
        price.times(10).unwrap(),
        Amount::parse("0.35").unwrap().times(3).unwrap(),
    ])
    .unwrap();
    assert_eq!(total.to_string(), "26.05");
}

#[test]
fn test_line_value_out_of_range_is_an_error() {
    let price = Amount::parse("2.50").unwrap();
    assert!(matches!(
        price.times(100_000_000_000_000_000),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(matches!(
        Amount::total([Amount::from_cents(i64::MAX), Amount::from_cents(1)]),
        Err(AppError::InvalidAmount(_))
    ));
}
