use super::*;

// =============================================================================
// delete guard
// =============================================================================

#[test]
fn admin_account_cannot_be_deleted() {
    assert!(!can_delete_user("admin"));
}

#[test]
fn regular_accounts_can_be_deleted() {
    assert!(can_delete_user("jdoe"));
    assert!(can_delete_user("demo1"));
    // Only the exact seeded username is protected.
    assert!(can_delete_user("admin2"));
    assert!(can_delete_user("Admin"));
}

// =============================================================================
// download filenames
// =============================================================================

#[test]
fn full_export_filename_is_fixed() {
    assert_eq!(download_filename(None), "horas_penosas_export.xlsx");
}

#[test]
fn month_export_filename_is_zero_padded() {
    assert_eq!(download_filename(Some((2025, 3))), "horas_penosas_2025_03.xlsx");
    assert_eq!(download_filename(Some((2026, 12))), "horas_penosas_2026_12.xlsx");
}

// =============================================================================
// rate form
// =============================================================================

#[test]
fn parse_rate_form_accepts_comma_decimal() {
    let rate = parse_rate_form("2025", "12,50").unwrap();
    assert_eq!(rate.year, 2025);
    assert!((rate.rate - 12.5).abs() < f64::EPSILON);
}

#[test]
fn parse_rate_form_rejects_bad_year() {
    assert!(parse_rate_form("", "12.5").is_err());
    assert!(parse_rate_form("20x5", "12.5").is_err());
    assert!(parse_rate_form("1990", "12.5").is_err());
}

#[test]
fn parse_rate_form_rejects_non_positive_rate() {
    assert!(parse_rate_form("2025", "0").is_err());
    assert!(parse_rate_form("2025", "0,00").is_err());
    assert!(parse_rate_form("2025", "abc").is_err());
    assert!(parse_rate_form("2025", "").is_err());
}
