// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Colorize;
use vcfkit_vcard::{Card, read_card, validate};

use crate::arg::CommonArgs;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdShow {
    pub file: PathBuf,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the name and dates of a card")
            .arg(CommonArgs::file())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            file: CommonArgs::get_file(matches)?,
        })
    }

    pub async fn run(self, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing card...");
        let card = read_card(&self.file)?;
        validate(&card)?;
        print!("{}", summarize(&card));
        Ok(())
    }
}

fn summarize(card: &Card) -> String {
    let line = |label: &str, value: &str| format!("{:<16}{}\n", label.bold(), value);
    let mut out = line("Name:", card.full_name());

    let birthday = card.birthday_string();
    if !birthday.is_empty() {
        out.push_str(&line("Birthday:", &birthday));
    }

    let anniversary = card.anniversary_string();
    if !anniversary.is_empty() {
        out.push_str(&line("Anniversary:", &anniversary));
    }

    let count = card.optional_property_count().to_string();
    out.push_str(&line("Other properties:", &count));
    out
}
