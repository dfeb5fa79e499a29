//! Profile scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod sections;

pub use config::Config;
pub use error::{ProfileScorerError, Result};
pub use processing::analyzer::{AnalysisReport, ScoringEngine};
pub use processing::profile::ProfileRecord;
pub use processing::scores::{CategoryScores, Section, SectionResult};
