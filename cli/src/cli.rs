// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::arg::CommonArgs;
use crate::cmd_edit::CmdEdit;
use crate::cmd_format::CmdFormat;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_new::CmdNew;
use crate::cmd_scan::CmdScan;
use crate::cmd_show::CmdShow;
use crate::cmd_validate::CmdValidate;
use crate::config::parse_config;

/// Run the vcf command-line interface.
pub async fn run() -> ExitCode {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose);
    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Whether debug logs are shown
    pub verbose: bool,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new("vcf")
            .about("Read, validate, edit and write vCard 4.0 contact cards.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/vcfkit/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/vcfkit/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(CommonArgs::verbose())
            .subcommand(CmdShow::command())
            .subcommand(CmdValidate::command())
            .subcommand(CmdScan::command())
            .subcommand(CmdNew::command())
            .subcommand(CmdEdit::command())
            .subcommand(CmdFormat::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)?),
            Some((CmdValidate::NAME, matches)) => Validate(CmdValidate::from(matches)),
            Some((CmdScan::NAME, matches)) => Scan(CmdScan::from(matches)),
            Some((CmdNew::NAME, matches)) => New(CmdNew::from(matches)?),
            Some((CmdEdit::NAME, matches)) => Edit(CmdEdit::from(matches)?),
            Some((CmdFormat::NAME, matches)) => Format(CmdFormat::from(matches)?),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        let verbose = CommonArgs::get_verbose(&matches);
        Ok(Cli {
            config,
            verbose,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the essentials of a card
    Show(CmdShow),

    /// Validate card files
    Validate(CmdValidate),

    /// List the valid cards in a directory
    Scan(CmdScan),

    /// Create a new card file
    New(CmdNew),

    /// Edit a card file in place
    Edit(CmdEdit),

    /// Print a card in canonical form
    Format(CmdFormat),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        if let GenerateCompletion(a) = self {
            return a.run();
        }

        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        match self {
            Show(a)     => a.run(&config).await,
            Validate(a) => a.run(&config).await,
            Scan(a)     => a.run(&config).await,
            New(a)      => a.run(&config).await,
            Edit(a)     => a.run(&config).await,
            Format(a)   => a.run(&config).await,
            GenerateCompletion(a) => a.run(),
        }
    }
}
