use super::*;
use time::macros::date;

fn sample_rows() -> Vec<ExportRow> {
    vec![
        ExportRow {
            worker: "Usuario Demo1".to_owned(),
            username: "demo1".to_owned(),
            date: date!(2025 - 03 - 01),
            shift: "Mañana".to_owned(),
            task: "Sacos".to_owned(),
            hours: 1.5,
        },
        ExportRow {
            worker: "Usuario Demo2".to_owned(),
            username: "demo2".to_owned(),
            date: date!(2025 - 03 - 02),
            shift: "Noche".to_owned(),
            task: "Filtros".to_owned(),
            hours: 8.0,
        },
    ]
}

#[test]
fn export_filename_full_dataset() {
    assert_eq!(export_filename(None), "horas_penosas_export.xlsx");
}

#[test]
fn export_filename_month_is_zero_padded() {
    assert_eq!(export_filename(Some((2025, 3))), "horas_penosas_2025_03.xlsx");
    assert_eq!(export_filename(Some((2025, 11))), "horas_penosas_2025_11.xlsx");
}

#[test]
fn build_workbook_produces_xlsx_bytes() {
    let bytes = build_workbook(&sample_rows()).expect("workbook build");
    // XLSX files are zip archives; check the magic and that content exists.
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[0..4], b"PK\x03\x04");
}

#[test]
fn build_workbook_accepts_empty_dataset() {
    let bytes = build_workbook(&[]).expect("empty workbook build");
    assert_eq!(&bytes[0..4], b"PK\x03\x04");
}
