// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

use crate::card::Parameter;
use crate::error::DateTimeError;
use crate::keyword::{KW_VALUE, KW_VALUE_TEXT};

/// Value of a `BDAY` or `ANNIVERSARY` property.
///
/// ```txt
/// date-and-or-time = date-time / date / "T" time
/// date             = 8DIGIT            ; e.g. 19960415
/// time             = 6DIGIT ["Z"]      ; e.g. 102200Z
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateTime {
    /// Free text, from `VALUE=text` or an update
    Text(String),

    /// Date and time components, both possibly empty
    Structured {
        /// `YYYYMMDD`, or empty
        date: String,
        /// `HHMMSS`, or empty
        time: String,
        /// Whether the value is in UTC
        utc: bool,
    },
}

impl DateTime {
    /// Decode a raw value region given the property parameters.
    ///
    /// No calendar check happens here, see [`DateTime::check_shape`].
    #[must_use]
    pub fn decode(raw: &str, parameters: &[Parameter]) -> Self {
        let is_text = parameters.iter().any(|p| {
            p.name.eq_ignore_ascii_case(KW_VALUE) && p.value.eq_ignore_ascii_case(KW_VALUE_TEXT)
        });
        if is_text {
            return Self::Text(raw.to_owned());
        }

        let Some((date, rest)) = raw.split_once('T') else {
            return Self::Structured {
                date: raw.chars().take(8).collect(),
                time: String::new(),
                utc: false,
            };
        };

        let mut time: String = rest.chars().take(6).collect();
        let utc = rest.ends_with('Z');
        if time.ends_with('Z') {
            time.pop();
        }
        Self::Structured {
            date: date.to_owned(),
            time,
            utc,
        }
    }

    /// Check the shape of a structured value.
    ///
    /// The date is empty or 8 ASCII digits, the time is empty or 6 ASCII
    /// digits, and a UTC value has a time. Text always passes.
    ///
    /// [`DateTime::decode`] keeps whatever it finds, so a parsed card can
    /// still fail here: short times such as `T1022Z` and reduced forms such
    /// as `--0203` or `1996-04` are rejected.
    ///
    /// # Errors
    ///
    /// Returns the first broken rule, tagged with `property`.
    pub fn check_shape(&self, property: &'static str) -> Result<(), DateTimeError> {
        let Self::Structured { date, time, utc } = self else {
            return Ok(());
        };

        if !is_digits(date, 8) {
            return Err(DateTimeError::InvalidDate {
                property,
                date: date.clone(),
            });
        }
        if !is_digits(time, 6) {
            return Err(DateTimeError::InvalidTime {
                property,
                time: time.clone(),
            });
        }
        if *utc && time.is_empty() {
            return Err(DateTimeError::UtcWithoutTime { property });
        }
        Ok(())
    }

    /// Whether this is the text variant.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Convert the date part to `jiff::civil::Date`.
    ///
    /// Returns `None` for text, an empty date, or a date outside the calendar.
    #[cfg(feature = "jiff")]
    #[must_use]
    pub fn civil_date(&self) -> Option<jiff::civil::Date> {
        let Self::Structured { date, .. } = self else {
            return None;
        };
        if !is_digits(date, 8) || date.is_empty() {
            return None;
        }

        let year = date.get(0..4)?.parse().ok()?;
        let month = date.get(4..6)?.parse().ok()?;
        let day = date.get(6..8)?.parse().ok()?;
        jiff::civil::Date::new(year, month, day).ok()
    }

    /// Convert the time part to `jiff::civil::Time`.
    #[cfg(feature = "jiff")]
    #[must_use]
    pub fn civil_time(&self) -> Option<jiff::civil::Time> {
        let Self::Structured { time, .. } = self else {
            return None;
        };
        if !is_digits(time, 6) || time.is_empty() {
            return None;
        }

        let hour = time.get(0..2)?.parse().ok()?;
        let minute = time.get(2..4)?.parse().ok()?;
        let second = time.get(4..6)?.parse().ok()?;
        jiff::civil::Time::new(hour, minute, second, 0).ok()
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Structured { date, time, utc } => {
                f.write_str(date)?;
                if !time.is_empty() {
                    write!(f, "T{time}")?;
                }
                if *utc {
                    f.write_str("Z")?;
                }
                Ok(())
            }
        }
    }
}

/// Empty, or exactly `len` ASCII digits.
fn is_digits(s: &str, len: usize) -> bool {
    s.is_empty() || (s.len() == len && s.bytes().all(|b| b.is_ascii_digit()))
}
