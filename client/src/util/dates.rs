//! Calendar helpers for the dashboard forms and selectors.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::Date;
use time::macros::format_description;

/// Entries before this year are rejected; the site went live in 2025.
pub const MIN_ENTRY_YEAR: i32 = 2025;

/// Full Spanish month names for the month selector, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parse the value of an `<input type="date">` (`"2025-03-01"`).
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), DATE_FORMAT).ok()
}

/// Format a date back into `<input type="date">` form.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}

/// Full month name for a 1-based month number.
#[must_use]
pub fn month_name(month: u8) -> &'static str {
    (month as usize)
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or("?")
}

/// Validate an entry date against the supported year window.
///
/// # Errors
///
/// Returns a user-facing message when the year is outside
/// `[MIN_ENTRY_YEAR, current_year]`.
pub fn validate_entry_year(date: Date, current_year: i32) -> Result<(), String> {
    let year = date.year();
    if year < MIN_ENTRY_YEAR || year > current_year {
        return Err(format!("El año debe estar entre {MIN_ENTRY_YEAR} y {current_year}"));
    }
    Ok(())
}

/// Selectable years for the month filter: 2025 through the current year.
#[must_use]
pub fn selectable_years(current_year: i32) -> Vec<i32> {
    (MIN_ENTRY_YEAR..=current_year.max(MIN_ENTRY_YEAR)).collect()
}

/// Today's year and 1-based month, from the browser clock.
#[must_use]
pub fn current_year_month() -> (i32, u8) {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation)]
        let year = now.get_full_year() as i32;
        #[allow(clippy::cast_possible_truncation)]
        let month = (now.get_month() as u8) + 1;
        (year, month)
    }
    #[cfg(not(feature = "csr"))]
    {
        (MIN_ENTRY_YEAR, 1)
    }
}

/// Today's date as an `<input type="date">` value, from the browser clock.
#[must_use]
pub fn today_value() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation)]
        let year = now.get_full_year() as i32;
        #[allow(clippy::cast_possible_truncation)]
        let month = (now.get_month() as u8) + 1;
        #[allow(clippy::cast_possible_truncation)]
        let day = now.get_date() as u8;
        format!("{year:04}-{month:02}-{day:02}")
    }
    #[cfg(not(feature = "csr"))]
    {
        format!("{MIN_ENTRY_YEAR:04}-01-01")
    }
}
