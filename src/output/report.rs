//! Report envelope wrapping an analysis for presentation

use crate::processing::analyzer::AnalysisReport;
use crate::processing::bands::Bands;
use crate::processing::scores::{Section, SectionResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An analysis plus everything a reader needs around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    pub analysis_results: AnalysisReport,

    /// Post ideas, empty when suggestions are disabled
    pub content_suggestions: Vec<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scorer_version: String,
    /// Where the profile came from, a file path or `demo:<handle>`
    pub source: String,
    pub profile_name: Option<String>,
}

/// Presentation grade for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreGrade {
    Poor,
    Fair,
    Good,
    Excellent,
}

const GRADES: Bands<f64, ScoreGrade> = Bands::new(
    &[(40.0, ScoreGrade::Poor), (70.0, ScoreGrade::Fair), (85.0, ScoreGrade::Good)],
    ScoreGrade::Excellent,
);

impl ScoreGrade {
    pub fn for_score(score: f64) -> Self {
        GRADES.lookup(score)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Poor => "POOR",
            ScoreGrade::Fair => "FAIR",
            ScoreGrade::Good => "GOOD",
            ScoreGrade::Excellent => "EXCELLENT",
        }
    }
}

impl ProfileReport {
    pub fn new(
        analysis_results: AnalysisReport,
        content_suggestions: Vec<String>,
        source: impl Into<String>,
        profile_name: Option<String>,
    ) -> Self {
        Self {
            analysis_results,
            content_suggestions,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                scorer_version: env!("CARGO_PKG_VERSION").to_string(),
                source: source.into(),
                profile_name,
            },
        }
    }

    pub fn overall_score(&self) -> f64 {
        self.analysis_results.overall_score
    }

    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::for_score(self.overall_score())
    }

    /// Sections from strongest to weakest. Equal scores keep analysis order.
    pub fn ranked_sections(&self) -> Vec<(Section, &SectionResult)> {
        let mut ranked: Vec<(Section, &SectionResult)> = self
            .analysis_results
            .sections
            .iter()
            .map(|(section, result)| (*section, result))
            .collect();
        ranked.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));
        ranked
    }

    pub fn title(&self) -> String {
        match &self.metadata.profile_name {
            Some(name) => format!("Profile Analysis: {}", name),
            None => "Profile Analysis".to_string(),
        }
    }
}
