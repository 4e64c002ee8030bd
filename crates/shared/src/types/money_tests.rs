use super::*;
use rstest::rstest;
use rust_decimal_macros::dec;

#[rstest]
#[case(dec!(100000), 10_000_000)]
#[case(dec!(500), 50_000)]
#[case(dec!(0.01), 1)]
#[case(dec!(12.345), 1_235)]
#[case(dec!(12.344), 1_234)]
#[case(dec!(0.004), 0)]
#[case(dec!(-3.5), -350)]
fn test_to_minor_units(#[case] amount: Decimal, #[case] expected: i64) {
    assert_eq!(to_minor_units(amount).unwrap(), expected);
}

#[test]
fn test_from_minor_units() {
    assert_eq!(from_minor_units(450_000), dec!(4500));
    assert_eq!(from_minor_units(1), dec!(0.01));
    assert_eq!(from_minor_units(0), Decimal::ZERO);
}

#[test]
fn test_minor_units_round_trip_keeps_two_places() {
    let amount = dec!(20000.50);
    let units = to_minor_units(amount).unwrap();
    assert_eq!(from_minor_units(units), amount);
}

#[test]
fn test_out_of_range() {
    assert_eq!(
        to_minor_units(Decimal::MAX),
        Err(MoneyError::OutOfRange(Decimal::MAX))
    );
}

#[test]
fn test_normalize_rounds_half_away_from_zero() {
    assert_eq!(normalize(dec!(1.005)), dec!(1.01));
    assert_eq!(normalize(dec!(-1.005)), dec!(-1.01));
    assert_eq!(normalize(dec!(7)), dec!(7));
}
