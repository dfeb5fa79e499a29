//! Compiled keyword tables used by the section analyzers

use crate::config::ScoringConfig;
use crate::error::{ProfileScorerError, Result};
use aho_corasick::AhoCorasick;

/// Case-insensitive substring matcher over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    matcher: AhoCorasick,
    terms: Vec<String>,
}

impl KeywordSet {
    pub fn new(name: &str, terms: &[String]) -> Result<Self> {
        let terms: Vec<String> = terms
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&terms)
            .map_err(|e| {
                ProfileScorerError::Configuration(format!("Failed to build {} matcher: {}", name, e))
            })?;

        Ok(Self { matcher, terms })
    }

    /// Number of distinct terms occurring anywhere in `text`.
    pub fn distinct_hits(&self, text: &str) -> usize {
        let mut seen = vec![false; self.terms.len()];
        for mat in self.matcher.find_overlapping_iter(text) {
            seen[mat.pattern().as_usize()] = true;
        }
        seen.into_iter().filter(|hit| *hit).count()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Every vocabulary the analyzers consult, compiled once from configuration.
#[derive(Debug, Clone)]
pub struct ScoringRules {
    pub headline_keywords: KeywordSet,
    pub headline_highlights: KeywordSet,
    pub storytelling: KeywordSet,
    pub achievement_verbs: KeywordSet,
    pub bullet_markers: KeywordSet,
    pub technical_terms: KeywordSet,
    pub soft_terms: KeywordSet,
    pub domain_terms: KeywordSet,
}

impl ScoringRules {
    pub fn from_config(config: &ScoringConfig) -> Result<Self> {
        Ok(Self {
            headline_keywords: KeywordSet::new("headline keyword", &config.headline_keywords)?,
            headline_highlights: KeywordSet::new("headline highlight", &config.headline_highlights)?,
            storytelling: KeywordSet::new("storytelling", &config.storytelling_indicators)?,
            achievement_verbs: KeywordSet::new("achievement verb", &config.achievement_verbs)?,
            bullet_markers: KeywordSet::new("bullet marker", &config.bullet_markers)?,
            technical_terms: KeywordSet::new("technical term", &config.technical_terms)?,
            soft_terms: KeywordSet::new("soft skill term", &config.soft_terms)?,
            domain_terms: KeywordSet::new("domain term", &config.domain_terms)?,
        })
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default()).expect("Failed to compile default scoring rules")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(terms: &[&str]) -> KeywordSet {
        let terms: Vec<String> = terms.iter().map(|s| s.to_string()).collect();
        KeywordSet::new("test", &terms).unwrap()
    }

    #[test]
    fn test_hits_are_case_insensitive_and_distinct() {
        let keywords = set(&["engineer", "leader", "expert"]);
        assert_eq!(keywords.distinct_hits("ENGINEER, engineer and Leader"), 2);
        assert_eq!(keywords.distinct_hits("nothing here"), 0);
    }

    #[test]
    fn test_overlapping_terms_both_count() {
        let verbs = set(&["led", "ledger"]);
        assert_eq!(verbs.distinct_hits("general ledger"), 2);
    }

    #[test]
    fn test_substring_semantics() {
        let terms = set(&["hr"]);
        assert!(terms.matches("Three things"));
    }

    #[test]
    fn test_blank_terms_are_ignored() {
        let terms = set(&["", "  ", "rust"]);
        assert_eq!(terms.len(), 1);
    }

    #[test]
    fn test_default_rules_compile() {
        let rules = ScoringRules::default();
        assert_eq!(rules.headline_keywords.len(), 9);
        assert!(rules.headline_highlights.matches("A | B"));
        assert!(rules.headline_highlights.matches("Top ★ rated"));
    }
}
