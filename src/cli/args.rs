use chrono::{Datelike, Utc};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use crate::constants::{exit_codes, verbosity};
use crate::context::Lang;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for dayforge.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Day to scaffold (defaults to min(current day, 25) in EST).
    #[arg(
        short,
        long,
        value_name = "DAY",
        value_parser = clap::value_parser!(u32).range(1..=25)
    )]
    pub day: Option<u32>,

    /// Competition year (defaults to the current year).
    #[arg(long)]
    pub year: Option<u32>,

    /// Languages to scaffold templates for (comma-separated).
    #[arg(short, long, use_value_delimiter = true, value_enum)]
    pub langs: Vec<Lang>,

    /// Root of the puzzle repository.
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Directory with custom template packs (one subdirectory per language).
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Force the download of the instructions.
    #[arg(short = 'f', long = "download")]
    pub force_download: bool,

    /// Skip the downloading of the input data.
    #[arg(long, group = "data")]
    pub no_data: bool,

    /// Only restore the plaintext inputs from their encrypted mirrors.
    #[arg(long = "decrypt-data", group = "data")]
    pub decrypt_data: bool,

    /// Skip code template creation for each language.
    #[arg(long)]
    pub skip_templates: bool,

    /// Keep the raw instruction HTML file.
    #[arg(long)]
    pub keep_instructions: bool,

    /// Update the READMEs to contain part 2. Alias for
    /// '--download --no-data --skip-templates'.
    #[arg(long)]
    pub part_2: bool,

    /// Skip all network access (no input data, no instructions).
    #[arg(long)]
    pub offline: bool,

    /// Overwrite existing files without prompting.
    #[arg(long)]
    pub force: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The current puzzle day: today in EST, capped at 25.
pub fn default_day() -> u32 {
    let day = match chrono::offset::FixedOffset::west_opt(5 * 3600) {
        Some(est) => Utc::now().with_timezone(&est).day(),
        None => Utc::now().day(),
    };
    day.min(25)
}

/// The current competition year.
pub fn default_year() -> u32 {
    Utc::now().year() as u32
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
