// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::BufRead;

use crate::card::{Card, Parameter, Property};
use crate::error::{DocumentError, PropertyError, VCardError};
use crate::keyword::{KW_ANNIVERSARY, KW_BDAY, KW_FN, MARKER_BEGIN, MARKER_END, MARKER_VERSION};
use crate::syntax::{ContentLine, LogicalLine, LogicalLines, scan_content_line};
use crate::value::{DateTime, split_values};

/// Parse a single card from CRLF-terminated lines.
///
/// ## Errors
///
/// The first problem aborts parsing, no partial card is returned.
///
/// ## Examples
///
/// ```
/// # use vcfkit_vcard::parse;
/// let src = "\
/// BEGIN:VCARD\r\n\
/// VERSION:4.0\r\n\
/// FN:Jane Doe\r\n\
/// BDAY:19960415\r\n\
/// END:VCARD\r\n\
/// ";
/// let card = parse(src.as_bytes()).unwrap();
/// assert_eq!(card.full_name(), "Jane Doe");
/// assert_eq!(card.birthday_string(), "19960415");
/// ```
pub fn parse(reader: impl BufRead) -> Result<Card, VCardError> {
    let mut builder = CardBuilder::default();
    for logical in LogicalLines::new(reader) {
        builder.feed(&logical?)?;
    }
    builder.finish()
}

/// Parse a single card from a string, see [`parse`].
///
/// ## Errors
///
/// Same as [`parse`].
pub fn parse_str(src: &str) -> Result<Card, VCardError> {
    parse(src.as_bytes())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum State {
    #[default]
    Start,
    InBody,
    Done,
}

#[derive(Debug, Default)]
struct CardBuilder {
    state: State,
    saw_version: bool,
    full_name: Option<Property>,
    birthday: Option<DateTime>,
    anniversary: Option<DateTime>,
    optional_properties: Vec<Property>,
}

impl CardBuilder {
    fn feed(&mut self, logical: &LogicalLine) -> Result<(), VCardError> {
        let line = logical.line;
        match (self.state, logical.text.as_str()) {
            (State::Start, MARKER_BEGIN) => self.state = State::InBody,
            (State::Start, _) => return Err(DocumentError::ContentBeforeBegin { line }.into()),
            (State::Done, _) => return Err(DocumentError::ContentAfterEnd { line }.into()),
            (State::InBody, MARKER_BEGIN) => {
                return Err(DocumentError::DuplicateBegin { line }.into());
            }
            (State::InBody, MARKER_VERSION) => self.saw_version = true,
            (State::InBody, MARKER_END) => self.state = State::Done,
            (State::InBody, text) => {
                let content = scan_content_line(text).inspect_err(|err| {
                    tracing::debug!(line, %err, "malformed property line");
                })?;
                tracing::trace!(line, name = content.name, "property");
                self.property(&content)?;
            }
        }
        Ok(())
    }

    fn property(&mut self, content: &ContentLine<'_>) -> Result<(), PropertyError> {
        let parameters: Vec<_> = content
            .parameters
            .iter()
            .map(|p| Parameter::new(p.name, p.value))
            .collect();

        match content.name {
            KW_FN => {
                if content.value.is_empty() {
                    return Err(PropertyError::EmptyValue {
                        name: KW_FN.to_owned(),
                    });
                }

                // a later FN replaces the earlier value
                self.full_name = Some(Property {
                    group: content.group.to_owned(),
                    name: KW_FN.to_owned(),
                    parameters,
                    values: vec![content.value.to_owned()],
                });
            }
            KW_BDAY => set_date(&mut self.birthday, KW_BDAY, content.value, &parameters)?,
            KW_ANNIVERSARY => {
                set_date(&mut self.anniversary, KW_ANNIVERSARY, content.value, &parameters)?;
            }
            name => {
                let values = split_values(name, content.value)?;
                self.optional_properties.push(Property {
                    group: content.group.to_owned(),
                    name: name.to_owned(),
                    parameters,
                    values,
                });
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Card, VCardError> {
        if self.state == State::Start {
            return Err(DocumentError::MissingBegin.into());
        }
        if !self.saw_version {
            return Err(DocumentError::MissingVersion.into());
        }
        if self.state != State::Done {
            return Err(DocumentError::MissingEnd.into());
        }
        let Some(full_name) = self.full_name else {
            return Err(DocumentError::MissingFullName.into());
        };

        tracing::debug!(
            full_name = full_name.values.first().map_or("", String::as_str),
            properties = self.optional_properties.len(),
            "card parsed"
        );
        Ok(Card {
            full_name,
            birthday: self.birthday,
            anniversary: self.anniversary,
            optional_properties: self.optional_properties,
        })
    }
}

fn set_date(
    slot: &mut Option<DateTime>,
    name: &str,
    raw: &str,
    parameters: &[Parameter],
) -> Result<(), PropertyError> {
    if slot.is_some() {
        return Err(PropertyError::DuplicateDateTime {
            name: name.to_owned(),
        });
    }
    *slot = Some(DateTime::decode(raw, parameters));
    Ok(())
}
