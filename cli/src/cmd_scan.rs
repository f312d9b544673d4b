// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use tokio::{fs, task};
use vcfkit_vcard::{is_card_path, read_card, validate};

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdScan {
    pub dir: Option<PathBuf>,
}

impl CmdScan {
    pub const NAME: &str = "scan";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the valid cards in a directory")
            .arg(
                arg!(dir: [DIR] "Directory to scan, defaults to `cards_dir` of the configuration")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            dir: matches.get_one::<PathBuf>("dir").cloned(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "scanning cards...");
        let dir = self.dir.unwrap_or_else(|| config.cards_dir.clone());
        let found = scan_dir(&dir).await?;
        for (path, name) in &found {
            println!("{:<24} {}", name.bold(), path.display());
        }

        tracing::debug!(count = found.len(), dir = %dir.display(), "scan finished");
        Ok(())
    }
}

/// Collect the valid cards of `dir` as `(path, full name)`, sorted by path.
///
/// Files that fail to read or validate are skipped with a warning.
async fn scan_dir(dir: &Path) -> Result<Vec<(PathBuf, String)>, Box<dyn Error>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    let mut handles = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !is_card_path(&path) {
            continue;
        }

        handles.push(task::spawn_blocking(move || {
            let result = read_card(&path).and_then(|card| {
                validate(&card)?;
                Ok(card.full_name().to_owned())
            });
            (path, result)
        }));
    }

    let mut found = Vec::with_capacity(handles.len());
    for handle in handles {
        let (path, result) = handle.await?;
        match result {
            Ok(name) => found.push((path, name)),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping invalid card"),
        }
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}
