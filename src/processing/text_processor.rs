//! Resume text extraction helpers
//!
//! Stateless scans over free text that pull out job titles, qualifications,
//! achievement sentences, traits, skills, projects and publications. Each
//! scan returns a deduplicated list ranked by frequency, ties broken by first
//! occurrence.

use crate::config::Config;
use crate::error::{ProfileScorerError, Result};
use crate::processing::keywords::KeywordSet;
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

const TRAITS: &[&str] = &[
    "detail-oriented", "self-motivated", "results-driven", "analytical", "creative",
    "collaborative", "adaptable", "proactive", "organized", "innovative",
    "dependable", "curious", "resilient", "strategic",
];

const SKILLS: &[&str] = &[
    "rust", "python", "java", "javascript", "typescript", "golang", "kotlin", "swift",
    "sql", "postgresql", "mysql", "mongodb", "redis", "docker", "kubernetes",
    "terraform", "aws", "azure", "gcp", "linux", "git", "react", "angular", "vue",
    "node.js", "django", "flask", "spark", "kafka", "tensorflow", "pytorch",
    "machine learning", "data analysis", "project management", "agile", "scrum",
    "excel", "tableau", "figma", "leadership", "communication", "negotiation",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeHighlights {
    pub job_titles: Vec<String>,
    pub qualifications: Vec<String>,
    pub achievements: Vec<String>,
    pub traits: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub publications: Vec<String>,
}

impl ResumeHighlights {
    pub fn is_empty(&self) -> bool {
        self.job_titles.is_empty()
            && self.qualifications.is_empty()
            && self.achievements.is_empty()
            && self.traits.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.publications.is_empty()
    }
}

pub struct ResumeExtractor {
    max_items: usize,
    job_title_regex: Regex,
    qualification_regex: Regex,
    skill_regex: Regex,
    metric_regex: Regex,
    project_regex: Regex,
    publication_regex: Regex,
    whitespace_regex: Regex,
    achievement_verbs: KeywordSet,
    traits: AhoCorasick,
}

impl ResumeExtractor {
    pub fn new(max_items: usize, achievement_verbs: &[String]) -> Result<Self> {
        let skill_pattern = format!(
            r"(?i)\b(?:{})\b",
            SKILLS.iter().map(|s| regex::escape(s)).collect::<Vec<_>>().join("|")
        );

        let traits = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(TRAITS)
            .map_err(|e| ProfileScorerError::Configuration(format!("Failed to build trait matcher: {}", e)))?;

        Ok(Self {
            max_items,
            job_title_regex: compile(
                r"(?i)\b(?:(?:senior|junior|lead|principal|staff|chief|associate)\s+)?(?:(?:software|data|product|project|program|marketing|sales|research|security|systems|cloud|devops|frontend|backend|full[- ]stack|business|financial|operations|ux|qa)\s+)?(?:engineer|developer|manager|analyst|scientist|designer|consultant|architect|director|specialist)\b",
            )?,
            qualification_regex: compile(
                r"(?i)\b(?:ph\.?d|mba|b\.sc?|m\.sc?|bsc|msc|(?:bachelor|master)(?:'s)?(?: degree)? (?:of|in) [a-z]+|certified [a-z-]+(?: [a-z-]+)?|pmp|cpa|cfa|cissp)\b",
            )?,
            skill_regex: compile(&skill_pattern)?,
            metric_regex: compile(r"\d+(?:\.\d+)?\s?%|[$€£]\s?\d")?,
            project_regex: compile(r"(?i)\bprojects?\b")?,
            publication_regex: compile(
                r"(?i)\b(?:published|publications?|journal|conference|proceedings|patent|arxiv|doi)\b",
            )?,
            whitespace_regex: compile(r"\s+")?,
            achievement_verbs: KeywordSet::new("achievement verb", achievement_verbs)?,
            traits,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.extraction.max_items, &config.scoring.achievement_verbs)
    }

    pub fn job_titles(&self, text: &str) -> Vec<String> {
        let text = self.normalize(text);
        let found = self
            .job_title_regex
            .find_iter(&text)
            .map(|m| m.as_str().to_lowercase());
        self.rank(found)
    }

    pub fn qualifications(&self, text: &str) -> Vec<String> {
        let text = self.normalize(text);
        let found = self
            .qualification_regex
            .find_iter(&text)
            .map(|m| m.as_str().to_string());
        self.rank(found)
    }

    /// Sentences that start from an action verb or carry a metric.
    pub fn achievements(&self, text: &str) -> Vec<String> {
        let found = self
            .sentences(text)
            .into_iter()
            .filter(|s| self.achievement_verbs.matches(s) || self.metric_regex.is_match(s));
        self.rank(found)
    }

    pub fn traits(&self, text: &str) -> Vec<String> {
        let found = self
            .traits
            .find_iter(text)
            .map(|m| TRAITS[m.pattern().as_usize()].to_string());
        self.rank(found)
    }

    pub fn skills(&self, text: &str) -> Vec<String> {
        let text = self.normalize(text);
        let found = self
            .skill_regex
            .find_iter(&text)
            .map(|m| m.as_str().to_lowercase());
        self.rank(found)
    }

    pub fn projects(&self, text: &str) -> Vec<String> {
        let found = self
            .sentences(text)
            .into_iter()
            .filter(|s| self.project_regex.is_match(s));
        self.rank(found)
    }

    pub fn publications(&self, text: &str) -> Vec<String> {
        let found = self
            .sentences(text)
            .into_iter()
            .filter(|s| self.publication_regex.is_match(s));
        self.rank(found)
    }

    pub fn extract_all(&self, text: &str) -> ResumeHighlights {
        let highlights = ResumeHighlights {
            job_titles: self.job_titles(text),
            qualifications: self.qualifications(text),
            achievements: self.achievements(text),
            traits: self.traits(text),
            skills: self.skills(text),
            projects: self.projects(text),
            publications: self.publications(text),
        };
        debug!(
            "Extracted {} titles, {} skills, {} achievements",
            highlights.job_titles.len(),
            highlights.skills.len(),
            highlights.achievements.len()
        );
        highlights
    }

    /// Count case-insensitively, keep the first spelling seen, order by
    /// count then first occurrence.
    fn rank(&self, items: impl Iterator<Item = String>) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<(String, String)> = Vec::new();

        for item in items {
            let item = item.trim().to_string();
            if item.is_empty() {
                continue;
            }
            let key = item.to_lowercase();
            let count = counts.entry(key.clone()).or_insert(0);
            if *count == 0 {
                first_seen.push((key, item));
            }
            *count += 1;
        }

        let mut ranked: Vec<(usize, String)> = first_seen
            .into_iter()
            .map(|(key, item)| (counts[&key], item))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        ranked
            .into_iter()
            .take(self.max_items)
            .map(|(_, item)| item)
            .collect()
    }

    /// Sentences per line, with list markers stripped.
    fn sentences(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(|line| line.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '•' | '-' | '*' | '▪')))
            .map(|line| self.normalize(line))
            .flat_map(|line| {
                line.unicode_sentences()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn normalize(&self, text: &str) -> String {
        let folded: String = text
            .chars()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'',
                '\u{201C}' | '\u{201D}' => '"',
                '\u{2013}' | '\u{2014}' => '-',
                _ => c,
            })
            .collect();
        self.whitespace_regex.replace_all(&folded, " ").trim().to_string()
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::from_config(&Config::default()).expect("Failed to compile resume extraction patterns")
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ProfileScorerError::Configuration(format!("Invalid extraction pattern: {}", e)))
}
