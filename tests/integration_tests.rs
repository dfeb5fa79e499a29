//! Integration tests for the profile scorer

use profile_scorer::config::{Config, OutputFormat};
use profile_scorer::input::manager::InputManager;
use profile_scorer::input::{DemoProfileSource, JsonFileSource, ProfileSource};
use profile_scorer::output::{ProfileReport, ReportGenerator};
use profile_scorer::processing::aggregator;
use profile_scorer::processing::recommendations;
use profile_scorer::processing::scores::{CategoryScores, Section, SectionResult};
use profile_scorer::processing::suggestions::ContentSuggester;
use profile_scorer::processing::text_processor::ResumeExtractor;
use profile_scorer::{ProfileRecord, ScoringEngine};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

const EPSILON: f64 = 1e-6;

async fn sample_profile() -> ProfileRecord {
    JsonFileSource::new("tests/fixtures/sample_profile.json")
        .load()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/unsupported.xyz"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_sample_profile_scores() {
    let profile = sample_profile().await;
    assert_eq!(profile.skills.as_ref().map(Vec::len), Some(8));
    assert_eq!(profile.listed_skills().count(), 7);

    let report = ScoringEngine::default().analyze(&profile);
    let score = |section: Section| report.sections[&section].score;

    assert_eq!(score(Section::Headline), 82.0);
    assert_eq!(score(Section::Experience), 90.0);
    assert_eq!(score(Section::Education), 80.0);
    assert_eq!(score(Section::Certifications), 60.0);
    assert_eq!(score(Section::Recommendations), 46.0);
    assert_eq!(score(Section::Visuals), 45.0);
    assert_eq!(score(Section::Featured), 0.0);
    assert!((score(Section::About) - 50.7).abs() < EPSILON);
    assert!((score(Section::Skills) - 52.75).abs() < EPSILON);

    assert!((report.score_categories.completeness - 15.2).abs() < EPSILON);
    assert!((report.score_categories.keywords - 10.77).abs() < EPSILON);
    assert!((report.overall_score - 50.645).abs() < EPSILON);

    assert_eq!(
        report.overall_recommendations,
        vec![
            "Focus on improving your featured section as a priority.",
            "Your profile is average. With some targeted improvements, you can make it stand out more.",
            "Focus on quantifying achievements and adding more specific details to your experiences.",
            "Ensure all sections are complete and tell a cohesive professional story.",
        ]
    );
}

#[tokio::test]
async fn test_malformed_profile_is_rejected_whole() {
    let mut source = JsonFileSource::new("tests/fixtures/malformed_profile.json");
    let err = source.load().await.unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn test_headline_scenario() {
    let profile = ProfileRecord {
        headline: Some("Senior Software Engineer | Cloud Platforms ★".to_string()),
        ..Default::default()
    };
    let report = ScoringEngine::default().analyze(&profile);
    let headline = &report.sections[&Section::Headline];

    assert_eq!(headline.score, 66.0);
    assert_eq!(headline.category_scores.completeness, 25.0);
    assert_eq!(headline.category_scores.keywords, 8.0);
    assert_eq!(headline.category_scores.impact, 25.0);
    assert_eq!(headline.category_scores.relevance, 8.0);
}

#[test]
fn test_empty_skills_scenario() {
    let report = ScoringEngine::default()
        .analyze_value(&json!({ "skills": [] }))
        .unwrap();
    let skills = &report.sections[&Section::Skills];

    assert_eq!(skills.score, 0.0);
    assert_eq!(skills.category_scores, CategoryScores::default());
    assert_eq!(
        skills.feedback,
        vec!["Your skills section is empty. Adding relevant skills is crucial for discoverability."]
    );
}

#[test]
fn test_short_impersonal_about_scenario() {
    let about = "Data person working across teams and regions.";
    assert_eq!(about.chars().count(), 45);

    let report = ScoringEngine::default()
        .analyze_value(&json!({ "about": about }))
        .unwrap();
    let result = &report.sections[&Section::About];

    assert_eq!(result.category_scores.completeness, 5.0);
    assert_eq!(result.category_scores.impact, 0.0);
    assert_eq!(result.category_scores.relevance, 5.0);
    assert!((result.category_scores.keywords - 7.0 / 20.0).abs() < EPSILON);
    assert_eq!(
        result.feedback.last().unwrap(),
        "Your about section needs significant improvement."
    );
}

#[test]
fn test_all_maxed_sections_scenario() {
    let maxed = CategoryScores {
        completeness: 25.0,
        relevance: 25.0,
        impact: 25.0,
        keywords: 25.0,
    };
    let sections: BTreeMap<Section, SectionResult> = Section::ALL
        .iter()
        .map(|section| {
            (
                *section,
                SectionResult {
                    score: 100.0,
                    feedback: Vec::new(),
                    category_scores: maxed,
                },
            )
        })
        .collect();

    let categories = aggregator::aggregate(sections.values());
    let overall = aggregator::overall_score(&categories);
    assert_eq!(overall, 100.0);

    let lines = recommendations::generate(&sections, overall);
    assert_eq!(lines[0], "Focus on improving your headline section as a priority.");
    assert_eq!(
        lines[1],
        "Your profile is strong overall. Fine-tune to maintain your competitive edge."
    );
}

#[test]
fn test_bulleted_achievement_experience_scenario() {
    let entries: Vec<_> = (0..5)
        .map(|i| {
            let description = if i < 3 {
                "• Launched a new onboarding flow"
            } else {
                "Answered routine support tickets"
            };
            json!({ "title": format!("Role {}", i), "description": description })
        })
        .collect();

    let report = ScoringEngine::default()
        .analyze_value(&json!({ "experience": entries }))
        .unwrap();
    let experience = &report.sections[&Section::Experience];

    assert_eq!(experience.category_scores.completeness, 25.0);
    assert_eq!(experience.category_scores.keywords, 20.0);
    assert_eq!(experience.category_scores.impact, 25.0);
    assert_eq!(experience.category_scores.relevance, 20.0);
    assert_eq!(experience.score, 90.0);
}

#[tokio::test]
async fn test_demo_profiles_score_deterministically() {
    let engine = ScoringEngine::default();

    let mut featured = DemoProfileSource::from_url("https://www.linkedin.com/in/williamhgates/").unwrap();
    let profile = featured.load().await.unwrap();
    let first = engine.analyze(&profile);
    let second = engine.analyze(&profile);

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.sections[&Section::Headline].score, 35.0);
}

#[tokio::test]
async fn test_custom_keyword_tables_change_scoring() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.scoring.headline_keywords = vec!["rustacean".to_string()];
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    let engine = ScoringEngine::new(&loaded.scoring).unwrap();
    let profile = ProfileRecord {
        headline: Some("Rustacean".to_string()),
        ..Default::default()
    };

    let headline = &engine.analyze(&profile).sections[&Section::Headline];
    assert_eq!(headline.category_scores.keywords, 8.0);
}

#[tokio::test]
async fn test_resume_highlights_from_fixture() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let highlights = ResumeExtractor::default().extract_all(&text);
    assert_eq!(highlights.job_titles[0], "senior software engineer");
    assert!(highlights.skills.contains(&"react".to_string()));
    assert!(highlights.skills.contains(&"node.js".to_string()));
    assert!(highlights.traits.contains(&"detail-oriented".to_string()));
    assert!(highlights.publications.iter().any(|s| s.starts_with("Published")));
    assert!(highlights
        .achievements
        .iter()
        .any(|s| s.starts_with("Reduced API latency by 40%")));
}

#[tokio::test]
async fn test_full_report_as_json() {
    let profile = sample_profile().await;
    let analysis = ScoringEngine::default().analyze(&profile);
    let suggestions = ContentSuggester::default().suggest(&profile);
    let report = ProfileReport::new(
        analysis,
        suggestions,
        "tests/fixtures/sample_profile.json",
        profile.full_name.clone(),
    );

    let json = ReportGenerator::with_options(false, false, true, true, false)
        .generate_report(&report, OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["metadata"]["profile_name"], "Jane Doe");
    assert_eq!(value["content_suggestions"].as_array().unwrap().len(), 10);
    assert_eq!(
        value["content_suggestions"][0],
        "Share your insights on the latest trends in Information Technology"
    );
    let section_names: Vec<&str> = value["analysis_results"]["sections"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(section_names.len(), 10);
    assert!(section_names.contains(&"recommendations"));
}
