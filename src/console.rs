//! Handling the command line interface
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use crate::{
    error::{LensError, LensResult},
    export::ExportFormat,
    get_version,
};
use clap::{builder::Str, Parser};
use std::{path::PathBuf, str::FromStr};
use strum::IntoEnumIterator;

/// Command line arguments of the profile generator.
#[derive(Parser, Debug)]
#[command(author, version = Str::from(get_version()), about, long_about = None)]
pub struct Args {
    /// YAML configuration of the lens. If not given, the built-in reference lens is used
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// output file of the generated profile. If not given, the profile is written to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// output format (yaml, json or csv)
    #[arg(short, long, default_value = "yaml", value_parser = parse_export_format)]
    pub format: ExportFormat,

    /// optional SVG file for a plot of the profile
    #[arg(short, long)]
    pub plot: Option<PathBuf>,

    /// write the default configuration to the given file and exit
    #[arg(long)]
    pub write_default_config: Option<PathBuf>,
}

/// Evaluates if the passed format string is a valid [`ExportFormat`].
///
/// # Errors
///
/// Returns an error message listing all valid formats if the string is not recognized.
fn parse_export_format(format: &str) -> Result<ExportFormat, String> {
    ExportFormat::from_str(&format.to_lowercase()).map_err(|_| {
        let valid: Vec<String> = ExportFormat::iter().map(|f| f.to_string()).collect();
        format!("invalid format '{format}', valid formats: {}", valid.join(", "))
    })
}

impl Args {
    /// Parse [`Args`] from the given iterator of command line items.
    ///
    /// # Errors
    ///
    /// This function will return an error if the arguments cannot be parsed.
    pub fn try_parse_args<I, T>(items: I) -> LensResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(items).map_err(|e| LensError::Configuration(e.to_string()))
    }
}
