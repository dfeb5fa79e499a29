//! Skills analysis

use crate::processing::bands::Bands;
use crate::processing::keywords::{KeywordSet, ScoringRules};
use crate::processing::scores::{Category, ScoreCard, Section, SectionResult, CATEGORY_MAX};

const COUNT_BANDS: Bands<usize, f64> = Bands::new(&[(5, 5.0), (10, 12.0), (20, 20.0)], 25.0);
const TECHNICAL_POINTS: f64 = 8.0;
const SOFT_POINTS: f64 = 8.0;
const DOMAIN_POINTS: f64 = 9.0;
const RELEVANCE_FULL_AT: f64 = 20.0;
const IMPACT_FULL_AT: f64 = 25.0;

/// Blank entries are ignored, so a list of only blank names is empty.
pub fn analyze(skills: Option<&[String]>, rules: &ScoringRules) -> SectionResult {
    let skills: Vec<&str> = skills
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .filter(|skill| !skill.trim().is_empty())
        .collect();
    if skills.is_empty() {
        return SectionResult::absent(
            "Your skills section is empty. Adding relevant skills is crucial for discoverability.",
        );
    }

    let mut card = ScoreCard::new();
    let count = skills.len();

    let count_feedback = if count < 5 {
        "Consider adding more skills to your profile. Aim for at least 15-20 relevant skills."
    } else if count < 10 {
        "You have a good start with your skills, but adding more would improve visibility."
    } else if count < 20 {
        "You have a good number of skills listed."
    } else {
        "You have an impressive list of skills. Ensure they're all relevant and current."
    };
    card.award(Category::Completeness, COUNT_BANDS.lookup(count), count_feedback);

    let covers = |terms: &KeywordSet| skills.iter().any(|skill| terms.matches(skill));
    let mut categories = 0;
    let mut keywords = 0.0;
    for (terms, points) in [
        (&rules.technical_terms, TECHNICAL_POINTS),
        (&rules.soft_terms, SOFT_POINTS),
        (&rules.domain_terms, DOMAIN_POINTS),
    ] {
        if covers(terms) {
            categories += 1;
            keywords += points;
        }
    }
    let diversity_feedback = match categories {
        0 | 1 => "Try to include a more diverse set of skills across different categories.",
        2 => "You have skills in a couple of categories. Consider adding more diverse skills.",
        _ => "Great job showcasing a diverse range of skills across different categories.",
    };
    card.award(Category::Keywords, keywords, diversity_feedback);

    let listed = count as f64;
    let relevance_feedback = if listed >= RELEVANCE_FULL_AT {
        "Your skill list is broad enough to match most recruiter searches.".to_string()
    } else {
        format!(
            "Listing {} more skills would widen the searches you appear in.",
            RELEVANCE_FULL_AT as usize - count
        )
    };
    card.award(
        Category::Relevance,
        (listed / RELEVANCE_FULL_AT * CATEGORY_MAX).min(CATEGORY_MAX),
        relevance_feedback,
    );

    let impact_feedback = if listed >= IMPACT_FULL_AT {
        "Your skill list gives connections plenty of areas to endorse."
    } else {
        "Each skill you add gives connections another area to endorse."
    };
    card.award(
        Category::Impact,
        (listed / IMPACT_FULL_AT * CATEGORY_MAX).min(CATEGORY_MAX),
        impact_feedback,
    );

    card.finish(Section::Skills)
}
