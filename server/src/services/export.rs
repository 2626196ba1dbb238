//! Spreadsheet export — all entries joined with their owners, as XLSX.
//!
//! The column set (`Worker, Username, Date, Shift, Task, Hours`) and the
//! derived filenames are part of the external contract; administrators feed
//! the download straight into payroll spreadsheets.

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use sqlx::PgPool;
use time::Date;

use crate::services::entry::month_range;

pub const EXPORT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const HEADERS: [&str; 6] = ["Worker", "Username", "Date", "Shift", "Task", "Hours"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("invalid export month")]
    InvalidMonth,
    #[error("workbook error: {0}")]
    Workbook(#[from] XlsxError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One spreadsheet row: an entry joined with its owner.
#[derive(Debug, Clone)]
pub struct ExportRow {
    pub worker: String,
    pub username: String,
    pub date: Date,
    pub shift: String,
    pub task: String,
    pub hours: f64,
}

/// Filename for the download: the full dataset or one calendar month.
#[must_use]
pub fn export_filename(month: Option<(i32, u8)>) -> String {
    match month {
        None => "horas_penosas_export.xlsx".to_owned(),
        Some((year, month)) => format!("horas_penosas_{year}_{month:02}.xlsx"),
    }
}

/// Fetch export rows, optionally restricted to one month, ordered by date.
///
/// # Errors
///
/// Returns `InvalidMonth` for an impossible year/month pair, `Database` if
/// the query fails.
pub async fn fetch_rows(pool: &PgPool, month: Option<(i32, u8)>) -> Result<Vec<ExportRow>, ExportError> {
    type Row = (String, String, Date, String, String, f64);

    let rows = match month {
        Some((year, m)) => {
            let (start, end) = month_range(year, m).ok_or(ExportError::InvalidMonth)?;
            sqlx::query_as::<_, Row>(
                r"SELECT COALESCE(u.full_name, u.username), u.username,
                         e.date, e.shift, e.task, e.amount
                  FROM work_entries e
                  JOIN users u ON u.id = e.user_id
                  WHERE e.date >= $1 AND e.date < $2
                  ORDER BY e.date, u.username",
            )
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Row>(
                r"SELECT COALESCE(u.full_name, u.username), u.username,
                         e.date, e.shift, e.task, e.amount
                  FROM work_entries e
                  JOIN users u ON u.id = e.user_id
                  ORDER BY e.date, u.username",
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows
        .into_iter()
        .map(|(worker, username, date, shift, task, hours)| ExportRow {
            worker,
            username,
            date,
            shift,
            task,
            hours,
        })
        .collect())
}

/// Build the XLSX workbook in memory.
///
/// # Errors
///
/// Returns a workbook error if a cell write or the final save fails.
pub fn build_workbook(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Horas")?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_with_format(0, u16::try_from(col).unwrap_or(0), *header, &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1);
        sheet.write(r, 0, &row.worker)?;
        sheet.write(r, 1, &row.username)?;
        sheet.write(r, 2, row.date.to_string())?;
        sheet.write(r, 3, &row.shift)?;
        sheet.write(r, 4, &row.task)?;
        sheet.write(r, 5, row.hours)?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
