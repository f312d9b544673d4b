// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Read and write card files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::card::Card;
use crate::error::{FileError, VCardError};
use crate::formatter::FormatOptions;
use crate::parser::parse;

/// Whether `path` has a `.vcf` or `.vcard` extension.
#[must_use]
pub fn is_card_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "vcf" || ext == "vcard")
}

/// Read and parse a card file.
///
/// # Errors
///
/// [`VCardError::InvalidFile`] if the extension is wrong or the file can not
/// be opened, otherwise any parse error.
#[tracing::instrument]
pub fn read_card(path: &Path) -> Result<Card, VCardError> {
    let invalid = |reason: FileError| VCardError::InvalidFile {
        path: path.to_path_buf(),
        reason,
    };

    if !is_card_path(path) {
        return Err(invalid(FileError::UnsupportedExtension));
    }

    let file = File::open(path).map_err(|e| invalid(e.into()))?;
    tracing::debug!(path = %path.display(), "parsing file");
    parse(BufReader::new(file)).map_err(|err| match err {
        VCardError::ResourceFailure(e) => invalid(e.into()),
        other => other,
    })
}

/// Write a card to a file, replacing its content.
///
/// # Errors
///
/// [`VCardError::WriteFailure`] if the extension is wrong or writing fails.
#[tracing::instrument(skip(card))]
pub fn write_card(path: &Path, card: &Card, options: FormatOptions) -> Result<(), VCardError> {
    let failure = |reason: FileError| VCardError::WriteFailure {
        path: path.to_path_buf(),
        reason,
    };

    if !is_card_path(path) {
        return Err(failure(FileError::UnsupportedExtension));
    }

    let file = File::create(path).map_err(|e| failure(e.into()))?;
    let mut writer = BufWriter::new(file);
    options
        .write(card, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| failure(e.into()))?;

    tracing::debug!(path = %path.display(), "card written");
    Ok(())
}
