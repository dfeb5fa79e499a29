//! Scoring engine combining the section analyzers, aggregation and recommendations

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::processing::aggregator;
use crate::processing::keywords::ScoringRules;
use crate::processing::profile::ProfileRecord;
use crate::processing::recommendations;
use crate::processing::scores::{CategoryScores, Section, SectionResult};
use crate::sections::analyze_section;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scores profiles against a fixed set of compiled keyword tables.
///
/// The engine holds no per-profile state; one instance can score any number
/// of profiles, including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    rules: ScoringRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Sum of the four aggregated categories, 0 to 100
    pub overall_score: f64,
    pub score_categories: CategoryScores,
    /// Keyed by section name, in analysis order
    pub sections: BTreeMap<Section, SectionResult>,
    pub overall_recommendations: Vec<String>,
}

impl ScoringEngine {
    pub fn new(config: &ScoringConfig) -> Result<Self> {
        Ok(Self {
            rules: ScoringRules::from_config(config)?,
        })
    }

    /// Score every section of a typed profile.
    pub fn analyze(&self, profile: &ProfileRecord) -> AnalysisReport {
        let mut sections = BTreeMap::new();
        for section in Section::ALL {
            let result = analyze_section(section, profile, &self.rules);
            debug!("Scored {} section: {:.1}", section, result.score);
            sections.insert(section, result);
        }

        let score_categories = aggregator::aggregate(sections.values());
        let overall_score = aggregator::overall_score(&score_categories);
        let overall_recommendations = recommendations::generate(&sections, overall_score);

        info!("Profile analysis complete, overall score {:.1}", overall_score);

        AnalysisReport {
            overall_score,
            score_categories,
            sections,
            overall_recommendations,
        }
    }

    /// Parse a raw record and score it. A malformed record yields no report.
    pub fn analyze_value(&self, raw: &serde_json::Value) -> Result<AnalysisReport> {
        let profile = ProfileRecord::from_value(raw)?;
        Ok(self.analyze(&profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::profile::{ExperienceEntry, Visuals};
    use serde_json::json;

    fn rich_profile() -> ProfileRecord {
        ProfileRecord::from_value(&json!({
            "headline": "Senior Software Engineer | Cloud Architecture Expert",
            "about": "I am a software engineer with a passion for building reliable systems. \
                      My journey started in embedded work, where I learned to love constraints.",
            "experience": [
                { "title": "Staff Engineer", "company": "Acme", "description": "• Led the platform team\n• Reduced costs by 30%" },
                { "title": "Engineer", "company": "Initech", "description": "- Implemented billing" }
            ],
            "skills": ["Rust", "Software Development", "Leadership", "Product Design"],
            "certifications": [{ "name": "AWS" }],
            "visuals": { "has_profile_image": true, "has_banner": false },
            "industry": "Computer Software"
        }))
        .unwrap()
    }

    #[test]
    fn test_report_covers_every_section_in_order() {
        let report = ScoringEngine::default().analyze(&rich_profile());
        let keys: Vec<Section> = report.sections.keys().copied().collect();
        assert_eq!(keys, Section::ALL.to_vec());
        assert_eq!(report.overall_recommendations.len(), 4);
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let report = ScoringEngine::default().analyze(&rich_profile());
        assert!((0.0..=100.0).contains(&report.overall_score));
        for (_, value) in report.score_categories.iter() {
            assert!((0.0..=25.0).contains(&value));
        }
        for result in report.sections.values() {
            assert!((0.0..=100.0).contains(&result.score));
        }
        let total = report.score_categories.total();
        assert!((report.overall_score - total).abs() < 1e-9);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let engine = ScoringEngine::default();
        let profile = rich_profile();
        assert_eq!(engine.analyze(&profile), engine.analyze(&profile));
    }

    #[test]
    fn test_removing_a_section_never_raises_its_score() {
        let engine = ScoringEngine::default();
        let full = rich_profile();
        let full_report = engine.analyze(&full);

        for section in Section::ALL {
            let mut reduced = full.clone();
            match section {
                Section::Headline => reduced.headline = None,
                Section::About => {
                    reduced.about = None;
                    reduced.summary = None;
                }
                Section::Experience => reduced.experience = None,
                Section::Education => reduced.education = None,
                Section::Skills => reduced.skills = None,
                Section::Certifications => reduced.certifications = None,
                Section::Recommendations => reduced.recommendations = None,
                Section::Visuals => reduced.visuals = None,
                Section::Featured => reduced.featured = None,
                Section::Activity => reduced.activity = None,
            }
            let reduced_report = engine.analyze(&reduced);
            assert!(
                reduced_report.sections[&section].score <= full_report.sections[&section].score,
                "{} increased when removed",
                section
            );
        }
    }

    #[test]
    fn test_empty_profile_prioritizes_headline() {
        let report = ScoringEngine::default().analyze(&ProfileRecord::default());
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(
            report.overall_recommendations[0],
            "Focus on improving your headline section as a priority."
        );
    }

    #[test]
    fn test_malformed_record_yields_no_report() {
        let err = ScoringEngine::default()
            .analyze_value(&json!({ "headline": ["not", "a", "string"] }))
            .unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_serialized_shape() {
        let profile = ProfileRecord {
            experience: Some(vec![ExperienceEntry::default()]),
            visuals: Some(Visuals { has_profile_image: true, has_banner: true }),
            ..Default::default()
        };
        let report = ScoringEngine::default().analyze(&profile);
        let value = serde_json::to_value(&report).unwrap();

        let mut top: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        top.sort();
        assert_eq!(top, vec!["overall_recommendations", "overall_score", "score_categories", "sections"]);

        let visuals = &value["sections"]["visuals"];
        let mut keys: Vec<&str> = visuals.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["category_scores", "feedback", "score"]);
        assert_eq!(value["sections"]["visuals"]["category_scores"]["completeness"], json!(25.0));
    }

    #[test]
    fn test_typed_and_raw_entry_points_agree() {
        let engine = ScoringEngine::default();
        let profile = ProfileRecord {
            skills: Some(vec!["".to_string(), " ".to_string(), "Rust".to_string()]),
            ..Default::default()
        };
        let raw = serde_json::to_value(&profile).unwrap();

        let typed = engine.analyze(&profile);
        assert_eq!(typed, engine.analyze_value(&raw).unwrap());

        let blank_only = ProfileRecord {
            skills: Some(vec!["".to_string(), " ".to_string()]),
            ..Default::default()
        };
        let raw = serde_json::to_value(&blank_only).unwrap();
        let typed = engine.analyze(&blank_only);
        assert_eq!(typed.sections[&Section::Skills].score, 0.0);
        assert_eq!(typed, engine.analyze_value(&raw).unwrap());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_shareable_across_threads() {
        assert_send_sync::<ScoringEngine>();
        assert_send_sync::<AnalysisReport>();

        let engine = ScoringEngine::default();
        let rich = rich_profile();
        let empty = ProfileRecord::default();

        let (parallel_rich, parallel_empty) = std::thread::scope(|scope| {
            let rich_run = scope.spawn(|| engine.analyze(&rich));
            let empty_run = scope.spawn(|| engine.analyze(&empty));
            (rich_run.join().unwrap(), empty_run.join().unwrap())
        });

        assert_eq!(parallel_rich, engine.analyze(&rich));
        assert_eq!(parallel_empty, engine.analyze(&empty));
    }
}
