// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! vCard formatter module.
//!
//! Writes a [`Card`] as CRLF-terminated content lines to any
//! `std::io::Write` implementer. Lines are never folded.
//!
//! # Example
//!
//! ```
//! use vcfkit_vcard::{Card, formatter::format};
//!
//! let mut card = Card::new();
//! card.set_full_name("Jane Doe").unwrap();
//! let vcf = format(&card).unwrap();
//! assert_eq!(vcf, "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane Doe\r\nEND:VCARD\r\n");
//! ```

use std::io::{self, Write};

use crate::card::{Card, Parameter, Property};
use crate::keyword::{
    KW_ADR, KW_ANNIVERSARY, KW_BDAY, KW_N, KW_VALUE, KW_VALUE_TEXT, MARKER_BEGIN, MARKER_END,
    MARKER_VERSION,
};
use crate::value::{DateTime, escape_value};

/// Convenience function to format a `Card` to a `String` (uses default options).
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format(card: &Card) -> io::Result<String> {
    FormatOptions::default().write_to_string(card)
}

/// Formatting options for the vCard formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// How the values of one property are joined.
    ///
    /// Default: `JoinStyle::Compatible`.
    pub join: JoinStyle,
}

impl FormatOptions {
    /// Set the value join style.
    #[must_use]
    pub const fn join(mut self, join: JoinStyle) -> Self {
        self.join = join;
        self
    }

    /// Convenience method to write a `Card` to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, card: &Card, w: &mut impl Write) -> io::Result<()> {
        Formatter::new(w, *self).write(card)
    }

    /// Convenience method to write a `Card` to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails or if the output contains invalid UTF-8 data.
    pub fn write_to_string(&self, card: &Card) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(card, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// How the values of a property are joined on output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum JoinStyle {
    /// `N` and `ADR` values joined with `;`, all others with `,`.
    ///
    /// A multi-valued property other than `N`/`ADR` reads back as one value.
    #[default]
    Compatible,

    /// All values joined with `;`, literal `;` escaped as `\;`.
    ///
    /// Property values read back unchanged, except one ending in `\`.
    /// `BDAY` and `ANNIVERSARY` read back unchanged only if they pass
    /// [`crate::validate`]: a UTC flag without a time is written as a bare
    /// `Z` after the date and lost.
    RoundTrip,
}

/// vCard formatter that writes to any `Write` implementer.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub const fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    /// Get a mutable reference to the underlying writer.
    #[must_use]
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a `Card` to the underlying writer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&mut self, card: &Card) -> io::Result<()> {
        self.write_line(MARKER_BEGIN)?;
        self.write_line(MARKER_VERSION)?;

        // FN is read back verbatim, so its value is never escaped
        let full_name = &card.full_name;
        self.write_head(&full_name.group, &full_name.name, &full_name.parameters)?;
        self.writer.write_all(b":")?;
        self.writer.write_all(full_name.values.join(",").as_bytes())?;
        self.writeln()?;

        if let Some(birthday) = &card.birthday {
            self.write_date_time(KW_BDAY, birthday)?;
        }
        if let Some(anniversary) = &card.anniversary {
            self.write_date_time(KW_ANNIVERSARY, anniversary)?;
        }
        for prop in &card.optional_properties {
            self.write_property(prop)?;
        }

        self.write_line(MARKER_END)?;
        self.writer.flush()
    }

    fn write_property(&mut self, prop: &Property) -> io::Result<()> {
        self.write_head(&prop.group, &prop.name, &prop.parameters)?;
        self.writer.write_all(b":")?;

        let value = match self.options.join {
            JoinStyle::Compatible => {
                let separator = if prop.name == KW_N || prop.name == KW_ADR {
                    ";"
                } else {
                    ","
                };
                prop.values.join(separator)
            }
            JoinStyle::RoundTrip => prop
                .values
                .iter()
                .map(|v| escape_value(v))
                .collect::<Vec<_>>()
                .join(";"),
        };
        self.writer.write_all(value.as_bytes())?;
        self.writeln()
    }

    fn write_date_time(&mut self, name: &str, value: &DateTime) -> io::Result<()> {
        self.writer.write_all(name.as_bytes())?;
        if value.is_text() {
            write!(self.writer, ";{KW_VALUE}={KW_VALUE_TEXT}")?;
        }
        write!(self.writer, ":{value}")?;
        self.writeln()
    }

    /// Write `[group.]name[;param=value]*`.
    fn write_head(&mut self, group: &str, name: &str, parameters: &[Parameter]) -> io::Result<()> {
        if !group.is_empty() {
            write!(self.writer, "{group}.")?;
        }
        self.writer.write_all(name.as_bytes())?;
        for param in parameters {
            write!(self.writer, ";{}={}", param.name, param.value)?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writeln()
    }

    /// Write a CRLF line ending.
    fn writeln(&mut self) -> io::Result<()> {
        write!(self.writer, "\r\n")
    }
}
