use super::*;
use time::macros::date;

#[test]
fn parse_date_reads_input_value() {
    assert_eq!(parse_date("2025-03-01"), Some(date!(2025 - 03 - 01)));
    assert_eq!(parse_date(" 2025-03-01 "), Some(date!(2025 - 03 - 01)));
}

#[test]
fn parse_date_rejects_garbage() {
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("01/03/2025"), None);
    assert_eq!(parse_date("2025-13-01"), None);
}

#[test]
fn format_date_round_trips() {
    let d = date!(2026 - 12 - 31);
    assert_eq!(parse_date(&format_date(d)), Some(d));
}

#[test]
fn year_2024_is_rejected() {
    assert!(validate_entry_year(date!(2024 - 12 - 31), 2026).is_err());
}

#[test]
fn years_2025_through_current_are_accepted() {
    assert!(validate_entry_year(date!(2025 - 01 - 01), 2026).is_ok());
    assert!(validate_entry_year(date!(2026 - 06 - 15), 2026).is_ok());
}

#[test]
fn future_year_is_rejected() {
    assert!(validate_entry_year(date!(2027 - 01 - 01), 2026).is_err());
}

#[test]
fn selectable_years_span_2025_to_current() {
    assert_eq!(selectable_years(2026), vec![2025, 2026]);
    assert_eq!(selectable_years(2025), vec![2025]);
    // A clock stuck before launch still offers the launch year.
    assert_eq!(selectable_years(2024), vec![2025]);
}

#[test]
fn month_name_is_spanish_full_name() {
    assert_eq!(month_name(1), "Enero");
    assert_eq!(month_name(12), "Diciembre");
    assert_eq!(month_name(0), "?");
    assert_eq!(month_name(13), "?");
}
