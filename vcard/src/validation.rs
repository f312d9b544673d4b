// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Structural and semantic checks over a built card.
//!
//! Checks run in a fixed order and stop at the first violation, each one
//! covering the whole property collection before the next one starts.

use crate::card::{Card, Property};
use crate::error::{DateTimeError, DocumentError, PropertyError, VCardError};
use crate::keyword::{KW_ANNIVERSARY, KW_BDAY, KW_N, KW_VERSION, N_COMPONENTS, is_known_property};

/// Validate a card without modifying it.
///
/// ## Errors
///
/// Returns the first violation found:
///
/// 1. `FN` without value: [`VCardError::InvalidDocument`]
/// 2. `BDAY`/`ANNIVERSARY` among the properties: [`VCardError::InvalidDateTime`]
/// 3. `VERSION` among the properties: [`VCardError::InvalidDocument`]
/// 4. unknown property name: [`VCardError::InvalidProperty`]
/// 5. property without value: [`VCardError::InvalidProperty`]
/// 6. `N` repeated or without exactly 5 components: [`VCardError::InvalidProperty`]
/// 7. parameter with empty name or value: [`VCardError::InvalidProperty`]
/// 8. malformed birthday or anniversary: [`VCardError::InvalidDateTime`]
pub fn validate(card: &Card) -> Result<(), VCardError> {
    check(card).inspect_err(|err| tracing::debug!(%err, "card failed validation"))
}

fn check(card: &Card) -> Result<(), VCardError> {
    if card.full_name.values.is_empty() {
        return Err(DocumentError::EmptyFullName.into());
    }

    let properties = &card.optional_properties;
    if let Some(prop) = properties.iter().find(|p| is_date_property(p)) {
        return Err(DateTimeError::InProperties {
            name: prop.name.clone(),
        }
        .into());
    }

    if properties.iter().any(|p| p.name == KW_VERSION) {
        return Err(DocumentError::VersionProperty.into());
    }

    if let Some(prop) = properties.iter().find(|p| !is_known_property(&p.name)) {
        return Err(PropertyError::UnknownName {
            name: prop.name.clone(),
        }
        .into());
    }

    if let Some(prop) = properties.iter().find(|p| p.values.is_empty()) {
        return Err(PropertyError::NoValues {
            name: prop.name.clone(),
        }
        .into());
    }

    check_n(properties)?;

    if let Some(prop) = properties
        .iter()
        .find(|p| p.parameters.iter().any(|a| a.name.is_empty() || a.value.is_empty()))
    {
        return Err(PropertyError::EmptyParameter {
            name: prop.name.clone(),
        }
        .into());
    }

    if let Some(birthday) = &card.birthday {
        birthday.check_shape(KW_BDAY)?;
    }
    if let Some(anniversary) = &card.anniversary {
        anniversary.check_shape(KW_ANNIVERSARY)?;
    }
    Ok(())
}

fn is_date_property(prop: &Property) -> bool {
    prop.name == KW_BDAY || prop.name == KW_ANNIVERSARY
}

/// `N` appears at most once, with exactly five components.
fn check_n(properties: &[Property]) -> Result<(), PropertyError> {
    let mut seen = false;
    for prop in properties.iter().filter(|p| p.name == KW_N) {
        if seen {
            return Err(PropertyError::DuplicateN);
        }
        seen = true;

        if prop.values.len() != N_COMPONENTS {
            return Err(PropertyError::NComponentCount {
                count: prop.values.len(),
            });
        }
    }
    Ok(())
}
