// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Errors reported while reading, validating and writing cards.
//!
//! Every failure maps onto one [`ErrorKind`]. The typed reasons
//! ([`DocumentError`], [`PropertyError`], [`DateTimeError`]) tell which rule
//! was broken first.

use std::io;
use std::path::PathBuf;

/// Error type for all card operations.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum VCardError {
    /// The path can not be opened or read as a card file.
    #[error("invalid file `{}`: {reason}", .path.display())]
    InvalidFile {
        /// Path given by the caller
        path: PathBuf,
        /// Why the file was rejected
        reason: FileError,
    },

    /// The document structure is broken.
    #[error("invalid card: {0}")]
    InvalidDocument(#[from] DocumentError),

    /// A property line or property collection is malformed.
    #[error("invalid property: {0}")]
    InvalidProperty(#[from] PropertyError),

    /// A birthday or anniversary is malformed or misplaced.
    #[error("invalid date-time: {0}")]
    InvalidDateTime(#[from] DateTimeError),

    /// The card can not be written to the path.
    #[error("cannot write `{}`: {reason}", .path.display())]
    WriteFailure {
        /// Path given by the caller
        path: PathBuf,
        /// Why the write failed
        reason: FileError,
    },

    /// The underlying reader failed.
    #[error("I/O failure: {0}")]
    ResourceFailure(#[from] io::Error),
}

impl VCardError {
    /// The coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFile { .. } => ErrorKind::InvalidFile,
            Self::InvalidDocument(_) => ErrorKind::InvalidDocument,
            Self::InvalidProperty(_) => ErrorKind::InvalidProperty,
            Self::InvalidDateTime(_) => ErrorKind::InvalidDateTime,
            Self::WriteFailure { .. } => ErrorKind::WriteFailure,
            Self::ResourceFailure(_) => ErrorKind::ResourceFailure,
        }
    }
}

/// Coarse classification of a [`VCardError`].
///
/// The `Display` form is the short human readable label, e.g. `Invalid Card`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::IntoStaticStr,
)]
pub enum ErrorKind {
    /// Bad path, extension, or unreadable file.
    #[strum(serialize = "Invalid File")]
    InvalidFile,

    /// Broken document structure.
    #[strum(serialize = "Invalid Card")]
    InvalidDocument,

    /// Malformed property.
    #[strum(serialize = "Invalid Property")]
    InvalidProperty,

    /// Malformed or misplaced date-time.
    #[strum(serialize = "Invalid Date-Time")]
    InvalidDateTime,

    /// Output could not be written.
    #[strum(serialize = "Write Error")]
    WriteFailure,

    /// Anything else, such as a failing reader.
    #[strum(serialize = "Other Error")]
    ResourceFailure,
}

/// Why a path was rejected for reading or writing.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The extension is neither `.vcf` nor `.vcard`.
    #[error("file extension must be .vcf or .vcard")]
    UnsupportedExtension,

    /// The operating system refused the operation.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Structural problems of a document.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// A physical line ends with LF only.
    #[error("line {line} ends with a bare line feed")]
    BareLineFeed {
        /// 1-based physical line number
        line: usize,
    },

    /// The last physical line has no line terminator.
    #[error("line {line} is not terminated by CRLF")]
    MissingLineEnding {
        /// 1-based physical line number
        line: usize,
    },

    /// A physical line is not valid UTF-8.
    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 {
        /// 1-based physical line number
        line: usize,
    },

    /// A property appears before `BEGIN:VCARD`.
    #[error("line {line} appears before BEGIN:VCARD")]
    ContentBeforeBegin {
        /// 1-based physical line number
        line: usize,
    },

    /// `BEGIN:VCARD` appears twice.
    #[error("line {line} repeats BEGIN:VCARD")]
    DuplicateBegin {
        /// 1-based physical line number
        line: usize,
    },

    /// Something follows `END:VCARD`.
    #[error("line {line} appears after END:VCARD")]
    ContentAfterEnd {
        /// 1-based physical line number
        line: usize,
    },

    /// No `BEGIN:VCARD` line.
    #[error("missing BEGIN:VCARD")]
    MissingBegin,

    /// No `VERSION:4.0` line.
    #[error("missing VERSION:4.0")]
    MissingVersion,

    /// No `END:VCARD` line.
    #[error("missing END:VCARD")]
    MissingEnd,

    /// No `FN` property.
    #[error("missing FN property")]
    MissingFullName,

    /// The `FN` property carries no value.
    #[error("FN property has no value")]
    EmptyFullName,

    /// `VERSION` is stored as an ordinary property.
    #[error("VERSION must not appear among the properties")]
    VersionProperty,
}

/// Problems of a single property or of the property collection.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// No colon separates the name from the value.
    #[error("missing colon in property")]
    MissingColon,

    /// The property name is empty.
    #[error("missing property name")]
    MissingName,

    /// A group prefix is present but empty, as in `.TEL:...`.
    #[error("empty group name")]
    EmptyGroup,

    /// A parameter is malformed.
    #[error("{kind}")]
    InvalidParameter {
        /// Specific parameter problem
        kind: ParameterErrorKind,
    },

    /// The value region after the colon is empty.
    #[error("property {name} has an empty value")]
    EmptyValue {
        /// Property name
        name: String,
    },

    /// `BDAY` or `ANNIVERSARY` appears twice.
    #[error("duplicate {name} property")]
    DuplicateDateTime {
        /// Property name
        name: String,
    },

    /// The property name is not one this crate accepts.
    #[error("unknown property {name}")]
    UnknownName {
        /// Property name
        name: String,
    },

    /// The property carries no value.
    #[error("property {name} has no value")]
    NoValues {
        /// Property name
        name: String,
    },

    /// `N` appears more than once.
    #[error("N property appears more than once")]
    DuplicateN,

    /// `N` does not carry exactly five components.
    #[error("N property must have 5 components, found {count}")]
    NComponentCount {
        /// Number of components found
        count: usize,
    },

    /// A stored parameter has an empty name or value.
    #[error("property {name} has an empty parameter")]
    EmptyParameter {
        /// Property name
        name: String,
    },

    /// An empty full name was supplied to an update.
    #[error("full name must not be empty")]
    EmptyFullName,

    /// A value supplied to an update contains CR or LF.
    #[error("{name} value must not contain a line break")]
    LineBreak {
        /// Property name
        name: String,
    },
}

/// Specific parameter parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParameterErrorKind {
    /// Missing equals sign.
    ///
    /// Example: `TYPE work`
    #[error("missing equals in parameter")]
    MissingEquals,

    /// Missing parameter value.
    ///
    /// Example: `TYPE=`
    #[error("missing parameter value")]
    MissingValue,

    /// Empty parameter name.
    ///
    /// Example: `;=work`
    #[error("empty parameter name")]
    EmptyName,
}

/// Problems of a birthday or anniversary.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// `BDAY` or `ANNIVERSARY` is stored as an ordinary property.
    #[error("{name} must not appear among the properties")]
    InProperties {
        /// Property name
        name: String,
    },

    /// The date is neither empty nor eight digits.
    #[error("{property} date `{date}` is not 8 digits")]
    InvalidDate {
        /// `BDAY` or `ANNIVERSARY`
        property: &'static str,
        /// Offending date
        date: String,
    },

    /// The time is neither empty nor six digits.
    #[error("{property} time `{time}` is not 6 digits")]
    InvalidTime {
        /// `BDAY` or `ANNIVERSARY`
        property: &'static str,
        /// Offending time
        time: String,
    },

    /// The UTC flag is set without a time.
    #[error("{property} is marked UTC but has no time")]
    UtcWithoutTime {
        /// `BDAY` or `ANNIVERSARY`
        property: &'static str,
    },
}
