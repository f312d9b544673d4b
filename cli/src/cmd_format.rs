// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use vcfkit_vcard::{FormatOptions, JoinStyle, read_card};

use crate::arg::CommonArgs;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdFormat {
    pub file: PathBuf,
    pub join: Option<JoinStyle>,
}

impl CmdFormat {
    pub const NAME: &str = "format";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("fmt")
            .about("Print a card in canonical form")
            .arg(CommonArgs::file())
            .arg(CommonArgs::join())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            file: CommonArgs::get_file(matches)?,
            join: CommonArgs::get_join(matches)?,
        })
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "formatting card...");
        let card = read_card(&self.file)?;
        let join = self.join.unwrap_or(config.join_style);
        let out = FormatOptions::default().join(join).write_to_string(&card)?;
        print!("{out}");
        Ok(())
    }
}
