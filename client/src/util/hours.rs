//! Hours-field model and decimal ↔ hours:minutes conversion.
//!
//! DESIGN
//! ======
//! The amount field is a tagged union: at any moment the form holds either a
//! decimal text (`"1,75"`) or an hours/minutes pair (`1` / `45`), never both.
//! Toggling representations goes through the pure conversions below, so the
//! two views can never disagree about the underlying value.
//!
//! The conversion contract: a decimal survives a round trip through
//! (hours, minutes) to within 0.01 h (one minute of precision), and free-text
//! input is reduced to digits, `.` and `,` before parsing.

#[cfg(test)]
#[path = "hours_test.rs"]
mod hours_test;

/// Strip everything except digits, `.` and `,` from raw input.
#[must_use]
pub fn sanitize_decimal(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect()
}

/// Parse a decimal hours text, accepting `,` as the decimal separator.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned = sanitize_decimal(raw).replace(',', ".");
    let value: f64 = cleaned.parse().ok()?;
    value.is_finite().then_some(value)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Split decimal hours into whole hours and rounded minutes.
/// `1.75` becomes `(1, 45)`; rounding that reaches 60 carries into the hour.
#[must_use]
pub fn decimal_to_pair(value: f64) -> (u32, u32) {
    let value = value.max(0.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hours = value.floor() as u32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes = ((value - value.floor()) * 60.0).round() as u32;
    if minutes == 60 { (hours + 1, 0) } else { (hours, minutes) }
}

/// Combine an hours/minutes pair into decimal hours, rounded to 2 places.
#[must_use]
pub fn pair_to_decimal(hours: u32, minutes: u32) -> f64 {
    round2(f64::from(hours) + f64::from(minutes) / 60.0)
}

/// Render decimal hours back into form text (`8` rather than `8.00`).
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// The amount field of the entry form: one representation at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoursInput {
    Decimal(String),
    TimePair { hours: String, minutes: String },
}

impl Default for HoursInput {
    /// The form starts at a full 8-hour day in decimal mode.
    fn default() -> Self {
        Self::Decimal("8".to_owned())
    }
}

impl HoursInput {
    /// Resolve the current representation to decimal hours.
    /// Empty pair fields count as zero; minutes above 59 are invalid.
    #[must_use]
    pub fn to_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(raw) => parse_decimal(raw),
            Self::TimePair { hours, minutes } => {
                let h = parse_pair_field(hours)?;
                let m = parse_pair_field(minutes)?;
                if m > 59 {
                    return None;
                }
                Some(pair_to_decimal(h, m))
            }
        }
    }

    /// Switch to the other representation, preserving the value.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Self::Decimal(raw) => {
                let value = parse_decimal(raw).unwrap_or(0.0);
                let (hours, minutes) = decimal_to_pair(value);
                Self::TimePair { hours: hours.to_string(), minutes: minutes.to_string() }
            }
            Self::TimePair { .. } => {
                let value = self.to_decimal().unwrap_or(0.0);
                Self::Decimal(format_decimal(value))
            }
        }
    }

    /// Validate and resolve to a positive amount for submission.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the field does not parse or is not
    /// a positive number of hours.
    pub fn resolve_amount(&self) -> Result<f64, &'static str> {
        match self.to_decimal() {
            None => Err("Las horas no son válidas"),
            Some(v) if v <= 0.0 => Err("Las horas deben ser mayores que cero"),
            Some(v) => Ok(round2(v)),
        }
    }
}

fn parse_pair_field(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}
