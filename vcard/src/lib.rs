// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse, validate, edit and write vCard 4.0 contact cards.
//!
//! ```
//! # use vcfkit_vcard::{parse_str, validate, formatter::format};
//! let src = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:Simon Perreault\r\n\
//! TEL;TYPE=cell:+1-555-555-5555\r\n\
//! END:VCARD\r\n\
//! ";
//! let card = parse_str(src).unwrap();
//! assert_eq!(card.full_name(), "Simon Perreault");
//! assert!(validate(&card).is_ok());
//! assert_eq!(format(&card).unwrap(), src);
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

pub mod card;
pub mod error;
pub mod formatter;
pub mod io;
pub mod keyword;
mod parser;
pub mod syntax;
mod validation;
pub mod value;

pub use crate::card::{Card, Parameter, Property};
pub use crate::error::{
    DateTimeError, DocumentError, ErrorKind, FileError, ParameterErrorKind, PropertyError,
    VCardError,
};
pub use crate::formatter::{FormatOptions, JoinStyle};
pub use crate::io::{is_card_path, read_card, write_card};
pub use crate::parser::{parse, parse_str};
pub use crate::validation::validate;
pub use crate::value::DateTime;
