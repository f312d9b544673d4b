// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of vcfkit.

mod arg;
mod cli;
mod cmd_edit;
mod cmd_format;
mod cmd_generate_completion;
mod cmd_new;
mod cmd_scan;
mod cmd_show;
mod cmd_validate;
mod config;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{APP_NAME, Config, parse_config};
