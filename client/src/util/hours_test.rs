use super::*;

// =============================================================================
// sanitize / parse
// =============================================================================

#[test]
fn sanitize_strips_everything_but_digits_dot_comma() {
    assert_eq!(sanitize_decimal("1a.5h"), "1.5");
    assert_eq!(sanitize_decimal("  8,25 horas "), "8,25");
    assert_eq!(sanitize_decimal("abc"), "");
}

#[test]
fn parse_accepts_comma_as_decimal_separator() {
    assert_eq!(parse_decimal("1,75"), Some(1.75));
    assert_eq!(parse_decimal("1.75"), Some(1.75));
}

#[test]
fn parse_rejects_empty_and_garbage() {
    assert_eq!(parse_decimal(""), None);
    assert_eq!(parse_decimal("horas"), None);
    assert_eq!(parse_decimal("1.2.3"), None);
}

// =============================================================================
// decimal ↔ pair conversion
// =============================================================================

#[test]
fn one_point_seventy_five_is_one_hour_forty_five() {
    assert_eq!(decimal_to_pair(1.75), (1, 45));
}

#[test]
fn pair_back_to_decimal_matches() {
    assert!((pair_to_decimal(1, 45) - 1.75).abs() < f64::EPSILON);
}

#[test]
fn round_trip_is_within_one_minute() {
    for i in 0..=1600 {
        let d = f64::from(i) * 0.01;
        let (h, m) = decimal_to_pair(d);
        let back = pair_to_decimal(h, m);
        assert!(
            (back - d).abs() <= 0.01 + 1e-9,
            "round trip drifted: {d} -> ({h}, {m}) -> {back}"
        );
    }
}

#[test]
fn minute_rounding_carries_into_hours() {
    // 1.999 rounds to 120 minutes, which must carry to 2:00.
    assert_eq!(decimal_to_pair(1.999), (2, 0));
}

#[test]
fn negative_input_clamps_to_zero() {
    assert_eq!(decimal_to_pair(-1.5), (0, 0));
}

#[test]
fn format_decimal_drops_trailing_zeros_for_whole_hours() {
    assert_eq!(format_decimal(8.0), "8");
    assert_eq!(format_decimal(1.75), "1.75");
    assert_eq!(format_decimal(1.5), "1.50");
}

// =============================================================================
// HoursInput
// =============================================================================

#[test]
fn default_is_eight_hours_decimal() {
    assert_eq!(HoursInput::default(), HoursInput::Decimal("8".to_owned()));
    assert_eq!(HoursInput::default().to_decimal(), Some(8.0));
}

#[test]
fn decimal_variant_resolves_with_comma() {
    let input = HoursInput::Decimal("1,5".to_owned());
    assert_eq!(input.to_decimal(), Some(1.5));
}

#[test]
fn pair_variant_resolves_and_bounds_minutes() {
    let ok = HoursInput::TimePair { hours: "1".to_owned(), minutes: "45".to_owned() };
    assert_eq!(ok.to_decimal(), Some(1.75));

    let bad = HoursInput::TimePair { hours: "1".to_owned(), minutes: "60".to_owned() };
    assert_eq!(bad.to_decimal(), None);
}

#[test]
fn pair_variant_treats_empty_fields_as_zero() {
    let input = HoursInput::TimePair { hours: String::new(), minutes: "30".to_owned() };
    assert_eq!(input.to_decimal(), Some(0.5));
}

#[test]
fn toggle_decimal_to_pair_and_back_preserves_value() {
    let decimal = HoursInput::Decimal("1.75".to_owned());
    let pair = decimal.toggled();
    assert_eq!(
        pair,
        HoursInput::TimePair { hours: "1".to_owned(), minutes: "45".to_owned() }
    );
    let back = pair.toggled();
    assert_eq!(back.to_decimal(), Some(1.75));
}

#[test]
fn toggle_unparseable_decimal_falls_back_to_zero_pair() {
    let pair = HoursInput::Decimal("..".to_owned()).toggled();
    assert_eq!(
        pair,
        HoursInput::TimePair { hours: "0".to_owned(), minutes: "0".to_owned() }
    );
}

#[test]
fn resolve_amount_rejects_zero_and_negative() {
    assert!(HoursInput::Decimal("0".to_owned()).resolve_amount().is_err());
    assert!(HoursInput::Decimal(String::new()).resolve_amount().is_err());
    let zero_pair = HoursInput::TimePair { hours: "0".to_owned(), minutes: "0".to_owned() };
    assert!(zero_pair.resolve_amount().is_err());
}

#[test]
fn resolve_amount_accepts_positive_hours() {
    assert_eq!(HoursInput::Decimal("1,5".to_owned()).resolve_amount(), Ok(1.5));
}
