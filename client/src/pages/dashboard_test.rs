use super::*;
use time::macros::date;

fn sample_entry(id: i64, amount: f64) -> WorkEntry {
    WorkEntry {
        id,
        user_id: 1,
        date: date!(2025 - 03 - 01),
        shift: Shift::Manana,
        task: Task::Sacos,
        amount,
    }
}

// =============================================================================
// build_payload
// =============================================================================

#[test]
fn build_payload_happy_path() {
    let hours = HoursInput::Decimal("1,5".to_owned());
    let payload = build_payload("2025-03-01", Shift::Manana, Task::Sacos, &hours, 2026).unwrap();
    assert_eq!(payload.date, date!(2025 - 03 - 01));
    assert_eq!(payload.shift, Shift::Manana);
    assert_eq!(payload.task, Task::Sacos);
    assert!((payload.amount - 1.5).abs() < f64::EPSILON);
}

#[test]
fn build_payload_from_time_pair() {
    let hours = HoursInput::TimePair { hours: "1".to_owned(), minutes: "45".to_owned() };
    let payload = build_payload("2025-03-01", Shift::Tarde, Task::Filtros, &hours, 2026).unwrap();
    assert!((payload.amount - 1.75).abs() < f64::EPSILON);
}

#[test]
fn build_payload_rejects_bad_date() {
    let hours = HoursInput::default();
    assert!(build_payload("not-a-date", Shift::Manana, Task::Sacos, &hours, 2026).is_err());
}

#[test]
fn build_payload_rejects_out_of_range_years() {
    let hours = HoursInput::default();
    assert!(build_payload("2024-12-31", Shift::Manana, Task::Sacos, &hours, 2026).is_err());
    assert!(build_payload("2027-01-01", Shift::Manana, Task::Sacos, &hours, 2026).is_err());
}

#[test]
fn build_payload_rejects_zero_hours() {
    let hours = HoursInput::Decimal("0".to_owned());
    assert!(build_payload("2025-03-01", Shift::Manana, Task::Sacos, &hours, 2026).is_err());
}

// =============================================================================
// totals and chart scaling
// =============================================================================

#[test]
fn total_hours_sums_the_list() {
    let list = vec![sample_entry(1, 1.5), sample_entry(2, 8.0), sample_entry(3, 0.5)];
    assert!((total_hours(&list) - 10.0).abs() < f64::EPSILON);
}

#[test]
fn total_hours_of_empty_list_is_zero() {
    assert!((total_hours(&[]) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn bar_width_scales_against_max() {
    assert!((bar_width_pct(5.0, 10.0) - 50.0).abs() < f64::EPSILON);
    assert!((bar_width_pct(10.0, 10.0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn bar_width_handles_empty_and_zero_months() {
    assert!((bar_width_pct(0.0, 10.0) - 0.0).abs() < f64::EPSILON);
    assert!((bar_width_pct(0.0, 0.0) - 0.0).abs() < f64::EPSILON);
}
