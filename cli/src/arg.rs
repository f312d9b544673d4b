// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use vcfkit_vcard::JoinStyle;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show debug logs").global(true)
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn file() -> Arg {
        arg!(file: <FILE> "Path to the .vcf or .vcard file")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_file(matches: &ArgMatches) -> Result<PathBuf, Box<dyn Error>> {
        matches
            .get_one::<PathBuf>("file")
            .cloned()
            .ok_or_else(|| "card file is required".into())
    }

    pub fn files() -> Arg {
        Self::file().num_args(1..)
    }

    pub fn get_files(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("file")
            .map(|files| files.cloned().collect())
            .unwrap_or_default()
    }

    pub fn join() -> Arg {
        arg!(--join <STYLE> "How values are joined, overrides the configuration")
            .value_parser(["compatible", "round-trip"])
    }

    pub fn get_join(matches: &ArgMatches) -> Result<Option<JoinStyle>, Box<dyn Error>> {
        match matches.get_one::<String>("join") {
            Some(join) => Ok(Some(join.parse()?)),
            None => Ok(None),
        }
    }
}
