// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in vCard RFC 6350.

pub const KW_VERSION: &str = "VERSION";

// Marker lines, matched verbatim
pub const MARKER_BEGIN: &str = "BEGIN:VCARD";
pub const MARKER_VERSION: &str = "VERSION:4.0";
pub const MARKER_END: &str = "END:VCARD";

// Section 6 - Property Definitions
pub const KW_FN: &str = "FN";
pub const KW_N: &str = "N";
pub const KW_BDAY: &str = "BDAY";
pub const KW_ANNIVERSARY: &str = "ANNIVERSARY";
pub const KW_GENDER: &str = "GENDER";
pub const KW_LANG: &str = "LANG";
pub const KW_ORG: &str = "ORG";
pub const KW_ADR: &str = "ADR";
pub const KW_TEL: &str = "TEL";
pub const KW_EMAIL: &str = "EMAIL";
pub const KW_GEO: &str = "GEO";
pub const KW_KEY: &str = "KEY";
pub const KW_TZ: &str = "TZ";
pub const KW_URL: &str = "URL";

// Section 5 - Property Parameters
pub const KW_VALUE: &str = "VALUE";
pub const KW_VALUE_TEXT: &str = "text";

/// Property names accepted among the optional properties of a card.
pub const KNOWN_PROPERTIES: [&str; 14] = [
    KW_FN,
    KW_N,
    KW_BDAY,
    KW_ANNIVERSARY,
    KW_GENDER,
    KW_LANG,
    KW_ORG,
    KW_ADR,
    KW_TEL,
    KW_EMAIL,
    KW_GEO,
    KW_KEY,
    KW_TZ,
    KW_URL,
];

/// Number of components carried by a structured `N` value.
pub const N_COMPONENTS: usize = 5;

/// Check whether `name` is one of [`KNOWN_PROPERTIES`].
#[must_use]
pub fn is_known_property(name: &str) -> bool {
    KNOWN_PROPERTIES.contains(&name)
}
