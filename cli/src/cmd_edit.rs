// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgGroup, ArgMatches, Command, arg};
use colored::Colorize;
use vcfkit_vcard::{Card, FormatOptions, read_card, validate, write_card};

use crate::arg::CommonArgs;
use crate::cmd_new::{arg_name, get_name};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub file: PathBuf,
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub anniversary: Option<String>,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit the name or dates of a card file in place")
            .arg(CommonArgs::file())
            .arg(arg_name(false))
            .arg(
                arg!(-b --birthday <DATE> "Birthday, stored as free text")
                    .allow_hyphen_values(true),
            )
            .arg(
                arg!(-a --anniversary <DATE> "Anniversary, stored as free text")
                    .allow_hyphen_values(true),
            )
            .group(
                ArgGroup::new("changes")
                    .args(["name", "birthday", "anniversary"])
                    .required(true)
                    .multiple(true),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            file: CommonArgs::get_file(matches)?,
            name: get_name(matches),
            birthday: matches.get_one::<String>("birthday").cloned(),
            anniversary: matches.get_one::<String>("anniversary").cloned(),
        })
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing card...");
        let mut card = read_card(&self.file)?;
        self.apply(&mut card)?;
        validate(&card)?;

        let options = FormatOptions::default().join(config.join_style);
        write_card(&self.file, &card, options)?;
        println!("{} {}", "Updated".green(), self.file.display());
        Ok(())
    }

    fn apply(&self, card: &mut Card) -> Result<(), Box<dyn Error>> {
        if let Some(name) = &self.name {
            card.set_full_name(name)?;
        }
        if let Some(birthday) = &self.birthday {
            card.set_birthday(birthday)?;
        }
        if let Some(anniversary) = &self.anniversary {
            card.set_anniversary(anniversary)?;
        }
        Ok(())
    }
}
