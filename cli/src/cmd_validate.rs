// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Colorize;
use vcfkit_vcard::{VCardError, read_card, validate};

use crate::arg::CommonArgs;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdValidate {
    pub files: Vec<PathBuf>,
}

impl CmdValidate {
    pub const NAME: &str = "validate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("check")
            .about("Validate one or more card files")
            .arg(CommonArgs::files())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            files: CommonArgs::get_files(matches),
        }
    }

    pub async fn run(self, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "validating cards...");
        let mut failed = 0;
        for file in &self.files {
            match check_file(file) {
                Ok(()) => println!("{} {}", "OK".green(), file.display()),
                Err(e) => {
                    failed += 1;
                    println!("{} {}: {}", e.kind().to_string().red(), file.display(), e);
                }
            }
        }

        match failed {
            0 => Ok(()),
            n => Err(format!("{n} of {} cards are invalid", self.files.len()).into()),
        }
    }
}

fn check_file(path: &Path) -> Result<(), VCardError> {
    let card = read_card(path)?;
    validate(&card)
}
