use super::*;
use time::macros::date;

#[test]
fn shift_labels_round_trip() {
    for shift in Shift::ALL {
        assert_eq!(Shift::from_str(shift.as_str()), Some(shift));
    }
    assert_eq!(Shift::from_str("Madrugada"), None);
}

#[test]
fn task_labels_round_trip() {
    for task in Task::ALL {
        assert_eq!(Task::from_str(task.as_str()), Some(task));
    }
    assert_eq!(Task::from_str("sacos"), None, "labels are case-sensitive");
}

#[test]
fn shift_serializes_to_spanish_label() {
    assert_eq!(serde_json::to_string(&Shift::Manana).unwrap(), "\"Mañana\"");
    assert_eq!(serde_json::to_string(&Shift::Noche).unwrap(), "\"Noche\"");
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Worker).unwrap(), "\"worker\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn work_entry_json_shape() {
    let entry = WorkEntry {
        id: 7,
        user_id: 2,
        date: date!(2025 - 03 - 01),
        shift: Shift::Manana,
        task: Task::Sacos,
        amount: 1.5,
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["date"], "2025-03-01");
    assert_eq!(json["shift"], "Mañana");
    assert_eq!(json["task"], "Sacos");

    let restored: WorkEntry = serde_json::from_value(json).unwrap();
    assert_eq!(restored, entry);
}

#[test]
fn payload_parses_wire_date() {
    let payload: WorkEntryPayload = serde_json::from_str(
        r#"{"date":"2025-03-01","shift":"Mañana","task":"Sacos","amount":1.5}"#,
    )
    .unwrap();
    assert_eq!(payload.date, date!(2025 - 03 - 01));
    assert_eq!(payload.shift, Shift::Manana);
    assert!((payload.amount - 1.5).abs() < f64::EPSILON);
}

#[test]
fn register_user_defaults_optional_fields() {
    let reg: RegisterUser =
        serde_json::from_str(r#"{"username":"jdoe","password":"secret"}"#).unwrap();
    assert_eq!(reg.full_name, None);
    assert_eq!(reg.role, None);
}

#[test]
fn month_label_formats_known_months() {
    assert_eq!(month_label(2025, 1), "Ene 2025");
    assert_eq!(month_label(2025, 12), "Dic 2025");
}

#[test]
fn month_label_out_of_range_is_placeholder() {
    assert_eq!(month_label(2025, 13), "? 2025");
}
