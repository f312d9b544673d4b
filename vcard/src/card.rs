// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory representation of a vCard.

use crate::error::PropertyError;
use crate::keyword::{KW_ANNIVERSARY, KW_BDAY, KW_FN};
use crate::value::DateTime;

/// A parsed contact card.
///
/// The full name is always present. Birthday and anniversary are kept apart
/// from the other properties and never appear in [`Card::optional_properties`]
/// when the card comes from the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The `FN` property
    pub full_name: Property,

    /// The `BDAY` property value
    pub birthday: Option<DateTime>,

    /// The `ANNIVERSARY` property value
    pub anniversary: Option<DateTime>,

    /// All other properties in document order
    pub optional_properties: Vec<Property>,
}

impl Card {
    /// Create the minimal template: an `FN` property without values.
    ///
    /// The template does not pass validation until a full name is set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            full_name: Property::new(KW_FN),
            birthday: None,
            anniversary: None,
            optional_properties: Vec::new(),
        }
    }

    /// The first value of the `FN` property, or an empty string.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.full_name.values.first().map_or("", String::as_str)
    }

    /// The birthday formatted as `date[Ttime][Z]`, or the text, or empty.
    #[must_use]
    pub fn birthday_string(&self) -> String {
        self.birthday.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// The anniversary formatted like [`Card::birthday_string`].
    #[must_use]
    pub fn anniversary_string(&self) -> String {
        self.anniversary
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Number of properties besides `FN`, `BDAY` and `ANNIVERSARY`.
    #[must_use]
    pub fn optional_property_count(&self) -> usize {
        self.optional_properties.len()
    }

    /// Replace the full name.
    ///
    /// The `FN` property is renamed to `FN` and its first value replaced,
    /// or inserted if it has none.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::EmptyFullName`] if `name` is empty and
    /// [`PropertyError::LineBreak`] if it contains CR or LF. The card is
    /// left unchanged on error.
    pub fn set_full_name(&mut self, name: &str) -> Result<(), PropertyError> {
        if name.is_empty() {
            return Err(PropertyError::EmptyFullName);
        }
        check_single_line(KW_FN, name)?;

        KW_FN.clone_into(&mut self.full_name.name);
        match self.full_name.values.first_mut() {
            Some(value) => name.clone_into(value),
            None => self.full_name.values.push(name.to_owned()),
        }
        Ok(())
    }

    /// Replace the birthday with a text value.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::LineBreak`] if `text` contains CR or LF.
    pub fn set_birthday(&mut self, text: &str) -> Result<(), PropertyError> {
        check_single_line(KW_BDAY, text)?;
        self.birthday = Some(DateTime::Text(text.to_owned()));
        Ok(())
    }

    /// Replace the anniversary with a text value.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::LineBreak`] if `text` contains CR or LF.
    pub fn set_anniversary(&mut self, text: &str) -> Result<(), PropertyError> {
        check_single_line(KW_ANNIVERSARY, text)?;
        self.anniversary = Some(DateTime::Text(text.to_owned()));
        Ok(())
    }
}

/// Values are written raw, a line break would end the content line early.
fn check_single_line(name: &str, value: &str) -> Result<(), PropertyError> {
    if value.contains(['\r', '\n']) {
        return Err(PropertyError::LineBreak {
            name: name.to_owned(),
        });
    }
    Ok(())
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

/// A named property with parameters and values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Property {
    /// Group prefix, empty if none
    pub group: String,

    /// Property name (e.g., "TEL")
    pub name: String,

    /// Parameters in source order, duplicates allowed
    pub parameters: Vec<Parameter>,

    /// Values in source order
    pub values: Vec<String>,
}

impl Property {
    /// Create a property with no group, parameters or values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the group prefix.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Append a parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, value));
        self
    }

    /// Append a value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }
}

/// A `name=value` property parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Parameter name (e.g., "TYPE")
    pub name: String,

    /// Parameter value (e.g., "work")
    pub value: String,
}

impl Parameter {
    /// Create a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
