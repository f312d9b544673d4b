// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use vcfkit_vcard::{Card, FormatOptions, validate, write_card};

use crate::arg::CommonArgs;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdNew {
    pub file: PathBuf,
    pub name: String,
    pub force: bool,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a new card file")
            .arg(CommonArgs::file())
            .arg(arg_name(true))
            .arg(arg!(-f --force "Overwrite the file if it exists"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let name = get_name(matches).ok_or("Full name is required for a new card")?;
        Ok(Self {
            file: CommonArgs::get_file(matches)?,
            name,
            force: matches.get_flag("force"),
        })
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating card...");
        if !self.force && self.file.exists() {
            let path = self.file.display();
            return Err(format!("{path} already exists, use --force to overwrite").into());
        }

        let mut card = Card::new();
        card.set_full_name(&self.name)?;
        validate(&card)?;

        let options = FormatOptions::default().join(config.join_style);
        write_card(&self.file, &card, options)?;
        println!("{} {}", "Created".green(), self.file.display());
        Ok(())
    }
}

pub fn arg_name(required: bool) -> Arg {
    arg!(-n --name <NAME> "Full name of the contact").required(required)
}

pub fn get_name(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("name").cloned()
}
