//! Command-line front end
//!
//! Each subcommand maps onto exactly one date-time operation. Positional
//! arguments are optional at the clap level so that a missing value is
//! reported as an invalid argument by the operation itself.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;

use crate::config::{Config, DisplayConfig};
use crate::constants::CONFIG_GENERATED;
use crate::error::{DateTimeError, Result};
use crate::unit::Unit;
use crate::utils::datetime;

/// Format, parse and diff local date-times
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Format a date-time given as yyyy-MM-ddTHH:mm[:ss]
    Format(FormatArgs),

    /// Parse text into a date-time
    Parse(ParseArgs),

    /// Difference between two date-times given as yyyy-MM-ddTHH:mm[:ss]
    Diff(DiffArgs),

    /// Write a default configuration file
    Config {
        /// Destination; defaults to the platform config directory
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FormatArgs {
    /// Date-time to format
    pub date: Option<String>,

    /// Pattern such as "yyyy/MM/dd HH:mm"
    #[arg(short, long)]
    pub pattern: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ParseArgs {
    /// Text to parse
    pub text: Option<String>,

    /// Pattern the text is written in; ISO layouts when omitted
    #[arg(short, long)]
    pub pattern: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DiffArgs {
    /// Start date-time
    pub start: Option<String>,

    /// End date-time
    pub end: Option<String>,

    /// Unit such as days, hours or months
    pub unit: Option<String>,
}

/// Result of a single operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Output {
    Format { text: String },
    Parse { value: NaiveDateTime },
    Diff { unit: Unit, value: i64 },
}

impl Output {
    /// Render as plain text, or as a JSON object when `json` is set
    pub fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            return Ok(serde_json::to_string(self)?);
        }
        Ok(match self {
            Output::Format { text } => text.clone(),
            Output::Parse { value } => value.format(datetime::ISO_SECONDS_FORMAT).to_string(),
            Output::Diff { value, .. } => value.to_string(),
        })
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DateTimeError::missing(name)),
    }
}

/// Format a date-time, falling back to the configured pattern and then to
/// the MM/dd/yyyy HH:mm default
pub fn format(args: &FormatArgs, display: &DisplayConfig) -> Result<Output> {
    let date = datetime::parse_default(required(&args.date, "date")?)?;
    let text = match args.pattern.as_ref().or(display.pattern.as_ref()) {
        Some(pattern) => datetime::format_with_pattern(&date, pattern)?,
        None => datetime::format_default(&date),
    };
    Ok(Output::Format { text })
}

/// Parse text with the given pattern or the ISO layouts
pub fn parse(args: &ParseArgs) -> Result<Output> {
    let text = required(&args.text, "text")?;
    let value = match &args.pattern {
        Some(pattern) => datetime::parse_with_pattern(text, pattern)?,
        None => datetime::parse_default(text)?,
    };
    Ok(Output::Parse { value })
}

/// Difference between two ISO date-times
pub fn diff(args: &DiffArgs) -> Result<Output> {
    let start = required(&args.start, "start date")?;
    let end = required(&args.end, "end date")?;
    let unit: Unit = required(&args.unit, "unit")?.parse()?;

    let start = datetime::parse_default(start)?;
    let end = datetime::parse_default(end)?;
    let value = datetime::diff(&start, &end, unit)?;
    Ok(Output::Diff { unit, value })
}

/// Run the parsed command line against a loaded configuration
pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    let output = match &cli.command {
        Command::Format(args) => format(args, &config.display)?,
        Command::Parse(args) => parse(args)?,
        Command::Diff(args) => diff(args)?,
        Command::Config { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(&path)?;
            info!("wrote default configuration to {}", path.display());
            return Ok(format!("{}: {}", CONFIG_GENERATED, path.display()));
        }
    };

    info!("{:?}", output);
    output.render(cli.json || config.display.json)
}
