use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

const NOTATION_HELP: &str = "\
Notation:
  +       generator (start of circuit)
  number  resistor in ohms (10, 4.7, 4,7)
  x       unknown resistor to solve for
  _       series connection
  *       parallel group start/end
  ||      parallel branch start
  =       parallel branch end
  -       circuit end

Example: +10_20*x||30=*-";

#[derive(Parser, Debug)]
#[command(name = "ohmtrace")]
#[command(about = "Resistor network solver - equivalent resistance and one unknown resistor", long_about = None)]
#[command(after_help = NOTATION_HELP)]
pub struct Args {
    /// Circuit in ohmtrace notation
    #[arg(value_name = "CIRCUIT")]
    pub circuit: String,

    /// Measured total resistance. Can be given multiple times; each value is one attempt.
    #[arg(short, long, value_name = "OHMS", allow_negative_numbers = true)]
    pub measured: Vec<f64>,

    /// Current through the network in amperes, if known
    #[arg(short = 'I', long, value_name = "AMPS", allow_negative_numbers = true)]
    pub current: Option<f64>,

    /// Voltage across the network in volts, if known
    #[arg(short = 'V', long, value_name = "VOLTS", allow_negative_numbers = true)]
    pub voltage: Option<f64>,

    /// Settings file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Measurement attempts before giving up (overrides the settings file)
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<usize>,

    /// Decimals shown in text output (overrides the settings file)
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        parser::validate_framing(self.circuit.trim())?;
        if let Some(ref config_path) = self.config {
            validate_path(config_path)?;
        }
        if self.max_attempts == Some(0) {
            anyhow::bail!("--max-attempts must be at least 1");
        }
        Ok(())
    }

    /// Settings from the config file (or defaults) with flag overrides applied.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("Failed to load settings: {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(max_attempts) = self.max_attempts {
            settings.max_attempts = max_attempts;
        }
        if let Some(precision) = self.precision {
            settings.precision = precision;
        }
        Ok(settings)
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }
    std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
