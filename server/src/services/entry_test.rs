use super::*;
use shared::{Shift, Task};
use time::macros::date;

fn payload(date: Date, amount: f64) -> WorkEntryPayload {
    WorkEntryPayload { date, shift: Shift::Manana, task: Task::Sacos, amount }
}

// =============================================================================
// validate_payload
// =============================================================================

#[test]
fn validate_accepts_first_supported_year() {
    let today = date!(2026 - 08 - 07);
    assert!(validate_payload(&payload(date!(2025 - 03 - 01), 1.5), today).is_ok());
}

#[test]
fn validate_accepts_current_year() {
    let today = date!(2026 - 08 - 07);
    assert!(validate_payload(&payload(date!(2026 - 01 - 15), 8.0), today).is_ok());
}

#[test]
fn validate_rejects_year_before_2025() {
    let today = date!(2026 - 08 - 07);
    assert!(validate_payload(&payload(date!(2024 - 12 - 31), 1.0), today).is_err());
}

#[test]
fn validate_rejects_future_year() {
    let today = date!(2026 - 08 - 07);
    assert!(validate_payload(&payload(date!(2027 - 01 - 01), 1.0), today).is_err());
}

#[test]
fn validate_rejects_non_positive_amounts() {
    let today = date!(2026 - 08 - 07);
    assert!(validate_payload(&payload(date!(2025 - 06 - 01), 0.0), today).is_err());
    assert!(validate_payload(&payload(date!(2025 - 06 - 01), -2.0), today).is_err());
    assert!(validate_payload(&payload(date!(2025 - 06 - 01), f64::NAN), today).is_err());
}

// =============================================================================
// month_range / year_range
// =============================================================================

#[test]
fn month_range_covers_whole_month() {
    let (start, end) = month_range(2025, 3).unwrap();
    assert_eq!(start, date!(2025 - 03 - 01));
    assert_eq!(end, date!(2025 - 04 - 01));
}

#[test]
fn month_range_wraps_december_into_next_year() {
    let (start, end) = month_range(2025, 12).unwrap();
    assert_eq!(start, date!(2025 - 12 - 01));
    assert_eq!(end, date!(2026 - 01 - 01));
}

#[test]
fn month_range_rejects_month_zero_and_thirteen() {
    assert!(month_range(2025, 0).is_none());
    assert!(month_range(2025, 13).is_none());
}

#[test]
fn year_range_spans_january_to_january() {
    let (start, end) = year_range(2025).unwrap();
    assert_eq!(start, date!(2025 - 01 - 01));
    assert_eq!(end, date!(2026 - 01 - 01));
}

// =============================================================================
// last_n_months / build_monthly_stats
// =============================================================================

#[test]
fn last_n_months_is_oldest_first_and_includes_current() {
    let window = last_n_months(date!(2026 - 08 - 07), 3);
    assert_eq!(window, vec![(2026, 6), (2026, 7), (2026, 8)]);
}

#[test]
fn last_n_months_crosses_year_boundary() {
    let window = last_n_months(date!(2026 - 02 - 10), 6);
    assert_eq!(
        window,
        vec![(2025, 9), (2025, 10), (2025, 11), (2025, 12), (2026, 1), (2026, 2)]
    );
}

#[test]
fn build_monthly_stats_fills_empty_months_with_zeros() {
    let window = vec![(2026, 1), (2026, 2)];
    let hours = HashMap::from([((2026, 2), 10.0)]);
    let rates = HashMap::from([(2026, 12.5)]);

    let stats = build_monthly_stats(&window, &hours, &rates);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].name, "Ene 2026");
    assert!((stats[0].hours - 0.0).abs() < f64::EPSILON);
    assert!((stats[0].euros - 0.0).abs() < f64::EPSILON);
    assert!((stats[1].hours - 10.0).abs() < f64::EPSILON);
    assert!((stats[1].euros - 125.0).abs() < f64::EPSILON);
}

#[test]
fn build_monthly_stats_missing_rate_yields_zero_euros() {
    let window = vec![(2025, 12)];
    let hours = HashMap::from([((2025, 12), 7.5)]);
    let rates = HashMap::new();

    let stats = build_monthly_stats(&window, &hours, &rates);
    assert!((stats[0].hours - 7.5).abs() < f64::EPSILON);
    assert!((stats[0].euros - 0.0).abs() < f64::EPSILON);
}

#[test]
fn build_monthly_stats_rounds_to_two_places() {
    let window = vec![(2026, 3)];
    let hours = HashMap::from([((2026, 3), 1.333_333)]);
    let rates = HashMap::from([(2026, 10.0)]);

    let stats = build_monthly_stats(&window, &hours, &rates);
    assert!((stats[0].hours - 1.33).abs() < 1e-9);
    assert!((stats[0].euros - 13.33).abs() < 1e-9);
}

#[test]
fn scenario_march_entry_contributes_to_march_bucket() {
    // Submitting 1.5h on 2025-03-01 must show up as 1.5 hours for "Mar 2025".
    let window = vec![(2025, 3)];
    let hours = HashMap::from([((2025, 3), 1.5)]);
    let rates = HashMap::from([(2025, 20.0)]);

    let stats = build_monthly_stats(&window, &hours, &rates);
    assert_eq!(stats[0].name, "Mar 2025");
    assert!((stats[0].hours - 1.5).abs() < f64::EPSILON);
    assert!((stats[0].euros - 30.0).abs() < f64::EPSILON);
}
