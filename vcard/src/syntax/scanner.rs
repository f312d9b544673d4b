// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scanner for vCard content lines.
//!
//! Converts the token stream of one logical line into its parts:
//!
//! ```text
//! contentline = [group "."] name *(";" param) ":" value
//! param       = param-name "=" param-value
//! ```
//!
//! The value is returned raw: everything after the colon that closes the
//! name and parameter section, including any further colons.

use std::iter::Peekable;

use crate::error::{ParameterErrorKind, PropertyError};
use crate::syntax::Span;
use crate::syntax::lexer::{SpannedToken, Token, tokenize};

/// A scanned vCard content line, borrowing from the logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine<'src> {
    /// Group prefix (e.g., "item1"), empty if none
    pub group: &'src str,

    /// Property name (e.g., "TEL", "BDAY")
    pub name: &'src str,

    /// Property parameters in source order
    pub parameters: Vec<ScannedParameter<'src>>,

    /// Raw value region, escapes not decoded
    pub value: &'src str,
}

/// A scanned `name=value` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedParameter<'src> {
    /// Parameter name (e.g., "TYPE", "VALUE")
    pub name: &'src str,

    /// Parameter value, kept raw
    pub value: &'src str,
}

/// Scan one logical line.
///
/// # Errors
///
/// Returns a [`PropertyError`] when the line has no colon, no name, an empty
/// group, or a malformed parameter.
pub fn scan_content_line(src: &str) -> Result<ContentLine<'_>, PropertyError> {
    if !src.contains(':') {
        return Err(PropertyError::MissingColon);
    }

    let mut tokens = tokenize(src).into_iter().peekable();
    let (group, name) = parse_property_name(src, &mut tokens)?;

    let mut parameters = Vec::new();
    loop {
        match tokens.next() {
            Some(SpannedToken(Token::Semicolon, _)) => {
                let param = parse_parameter(src, &mut tokens)
                    .map_err(|kind| PropertyError::InvalidParameter { kind })?;
                parameters.push(param);
            }
            Some(SpannedToken(Token::Colon, span)) => {
                let value = src.get(span.end..).unwrap_or_default();
                return Ok(ContentLine {
                    group,
                    name,
                    parameters,
                    value,
                });
            }
            // name and parameter parsing stop only at delimiters
            Some(_) | None => return Err(PropertyError::MissingColon),
        }
    }
}

/// Parse `[group "."] name` up to the first `;` or `:`.
fn parse_property_name<'src>(
    src: &'src str,
    tokens: &mut Peekable<impl Iterator<Item = SpannedToken<'src>>>,
) -> Result<(&'src str, &'src str), PropertyError> {
    let region = consume_until_delimiter(tokens);
    let mut dot = None;
    for &SpannedToken(token, span) in &region.tokens {
        if token == Token::Dot {
            dot = Some(span);
            break;
        }
    }

    let text = slice(src, region.span);
    let (group, name) = match dot {
        Some(dot) => (
            slice(src, Span::new(region.span.start, dot.start)),
            slice(src, Span::new(dot.end, region.span.end)),
        ),
        None => ("", text),
    };

    if dot.is_some() && group.is_empty() {
        return Err(PropertyError::EmptyGroup);
    }
    if name.is_empty() {
        return Err(PropertyError::MissingName);
    }
    Ok((group, name))
}

/// Parse a single parameter after its leading `;`.
///
/// Format: `name=value`, the value ends at the next `;` or `:`
fn parse_parameter<'src>(
    src: &'src str,
    tokens: &mut Peekable<impl Iterator<Item = SpannedToken<'src>>>,
) -> Result<ScannedParameter<'src>, ParameterErrorKind> {
    let start = tokens.peek().map_or(src.len(), |t| t.1.start);
    let mut name_end = start;
    loop {
        match tokens.peek() {
            Some(&SpannedToken(Token::Equal, _)) => break,
            Some(&SpannedToken(token, span)) if !token.is_delimiter() => {
                name_end = span.end;
                tokens.next();
            }
            // reached `;`, `:` or end of line before `=`
            Some(_) | None => {
                return Err(if name_end == start {
                    ParameterErrorKind::EmptyName
                } else {
                    ParameterErrorKind::MissingEquals
                });
            }
        }
    }

    let name = slice(src, Span::new(start, name_end));
    if name.is_empty() {
        return Err(ParameterErrorKind::EmptyName);
    }
    tokens.next(); // consume `=`

    let region = consume_until_delimiter(tokens);
    let value = slice(src, region.span);
    if value.is_empty() {
        return Err(ParameterErrorKind::MissingValue);
    }

    Ok(ScannedParameter { name, value })
}

/// Tokens between the current position and the next `;` or `:`.
struct Region<'src> {
    tokens: Vec<SpannedToken<'src>>,
    span: Span,
}

fn consume_until_delimiter<'src>(
    tokens: &mut Peekable<impl Iterator<Item = SpannedToken<'src>>>,
) -> Region<'src> {
    let mut collected = Vec::new();
    let start = tokens.peek().map(|t| t.1.start);
    while let Some(&token) = tokens.peek() {
        if token.0.is_delimiter() {
            break;
        }
        collected.push(token);
        tokens.next();
    }

    let span = match (start, collected.last()) {
        (Some(start), Some(last)) => Span::new(start, last.1.end),
        (Some(start), None) => Span::new(start, start),
        (None, _) => Span::default(),
    };
    Region {
        tokens: collected,
        span,
    }
}

fn slice(src: &str, span: Span) -> &str {
    src.get(span.into_range()).unwrap_or_default()
}
