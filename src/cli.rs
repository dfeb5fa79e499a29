//! CLI interface for the profile scorer

use crate::config::OutputFormat;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "profile-scorer")]
#[command(about = "Rule-based professional profile scoring tool")]
#[command(long_about = "Score a professional profile section by section, aggregate completeness, relevance, impact and keyword categories, and suggest improvements")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a profile record stored as JSON
    Analyze {
        /// Path to the profile record (JSON)
        #[arg(short, long)]
        profile: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Score one of the built-in demo profiles
    #[command(group(ArgGroup::new("target").required(true).args(["username", "url"])))]
    Demo {
        /// Profile handle, e.g. williamhgates
        #[arg(short, long)]
        username: Option<String>,

        /// Profile URL of the form https://www.linkedin.com/in/<handle>
        #[arg(long)]
        url: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Pull highlights out of resume text
    Extract {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Report options shared by the scoring commands.
#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    /// Output format: console, json, markdown, html
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Include per-section feedback
    #[arg(short, long)]
    pub detailed: bool,

    /// Leave content suggestions out of the report
    #[arg(long)]
    pub no_suggestions: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
