//! Configuration management for the profile scorer

use crate::error::{Result, ProfileScorerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub suggestions: SuggestionConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

/// Keyword tables consulted by the section analyzers.
///
/// Numeric thresholds are fixed by the scoring rules; only the vocabularies
/// are configurable. The tables are compiled once into
/// [`ScoringRules`](crate::processing::keywords::ScoringRules) and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub headline_keywords: Vec<String>,
    pub headline_highlights: Vec<String>,
    pub storytelling_indicators: Vec<String>,
    pub achievement_verbs: Vec<String>,
    pub bullet_markers: Vec<String>,
    pub technical_terms: Vec<String>,
    pub soft_terms: Vec<String>,
    pub domain_terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    pub max_suggestions: usize,
    pub top_skills: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub max_items: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub include_suggestions: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            headline_keywords: strings(&[
                "leader", "expert", "specialist", "manager", "developer",
                "engineer", "professional", "consultant", "strategist",
            ]),
            headline_highlights: strings(&["|", "•", "★", "✓", "✔"]),
            storytelling_indicators: strings(&[
                "journey", "passion", "learned", "discovered", "built",
                "created", "led", "achieved", "mission", "vision",
            ]),
            achievement_verbs: strings(&[
                "achieved", "increased", "reduced", "improved", "led",
                "managed", "created", "developed", "implemented", "launched",
            ]),
            bullet_markers: strings(&["•", "-", "*"]),
            technical_terms: strings(&[
                "programming", "coding", "software", "development", "engineering",
            ]),
            soft_terms: strings(&[
                "leadership", "communication", "teamwork", "collaboration", "problem-solving",
            ]),
            domain_terms: strings(&[
                "marketing", "sales", "finance", "hr", "design", "product",
            ]),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            suggestions: SuggestionConfig {
                max_suggestions: 10,
                top_skills: 5,
            },
            extraction: ExtractionConfig { max_items: 5 },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                include_suggestions: true,
            },
        }
    }
}

impl Config {
    /// Load the user configuration, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ProfileScorerError::Configuration(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ProfileScorerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("profile-scorer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_match_scoring_rules() {
        let config = Config::default();
        assert_eq!(config.scoring.headline_keywords.len(), 9);
        assert_eq!(config.scoring.storytelling_indicators.len(), 10);
        assert_eq!(config.scoring.achievement_verbs.len(), 10);
        assert!(config.scoring.domain_terms.contains(&"hr".to_string()));
        assert_eq!(config.suggestions.max_suggestions, 10);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.extraction.max_items = 3;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.extraction.max_items, 3);
        assert_eq!(loaded.output.format, OutputFormat::Markdown);
        assert_eq!(loaded.scoring.bullet_markers, config.scoring.bullet_markers);
    }

    #[test]
    fn test_invalid_config_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scoring = 42").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ProfileScorerError::Configuration(_)));
    }
}
