// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Decoding of raw property values.

mod datetime;

pub use datetime::DateTime;

use crate::error::PropertyError;
use crate::syntax::lexer::{SpannedToken, Token, tokenize};

/// Split a raw value region into its components.
///
/// Components are separated by unescaped `;`, and `\;` decodes to a literal
/// `;`. No other escape sequence is decoded. Empty components are kept, so
/// `Doe;Jane;;;` yields five values.
///
/// # Errors
///
/// Returns [`PropertyError::EmptyValue`] if `raw` is empty.
pub fn split_values(name: &str, raw: &str) -> Result<Vec<String>, PropertyError> {
    if raw.is_empty() {
        return Err(PropertyError::EmptyValue {
            name: name.to_owned(),
        });
    }

    let mut values = Vec::new();
    let mut current = String::new();
    for SpannedToken(token, span) in tokenize(raw) {
        match token {
            Token::Semicolon => values.push(std::mem::take(&mut current)),
            Token::EscapedSemicolon => current.push(';'),
            _ => current.push_str(raw.get(span.into_range()).unwrap_or_default()),
        }
    }
    values.push(current);
    Ok(values)
}

/// Escape literal `;` so [`split_values`] reads `value` back as one component.
#[must_use]
pub fn escape_value(value: &str) -> String {
    value.replace(';', r"\;")
}
