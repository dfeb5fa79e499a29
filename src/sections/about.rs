//! About / summary analysis

use crate::processing::bands::Bands;
use crate::processing::keywords::ScoringRules;
use crate::processing::scores::{Category, ScoreCard, Section, SectionResult, CATEGORY_MAX};

const LENGTH_BANDS: Bands<usize, f64> = Bands::new(&[(50, 5.0), (200, 10.0), (1000, 20.0)], 25.0);
const POINTS_PER_STORY_SIGNAL: f64 = 3.0;
const WORDS_PER_KEYWORD_POINT: f64 = 20.0;
const FIRST_PERSON_RELEVANCE: f64 = 20.0;
const IMPERSONAL_RELEVANCE: f64 = 5.0;

pub fn analyze(about: Option<&str>, rules: &ScoringRules) -> SectionResult {
    let Some(about) = about.filter(|a| !a.trim().is_empty()) else {
        return SectionResult::absent(
            "You don't have an about section. This is a crucial part of your profile where you tell your professional story.",
        );
    };

    let mut card = ScoreCard::new();

    let length = about.chars().count();
    let completeness = LENGTH_BANDS.lookup(length);
    let length_feedback = if length < 50 {
        "Your about section is too short. Aim for at least 200-300 characters."
    } else if length < 200 {
        "Your about section is on the shorter side. Consider expanding it."
    } else if length < 1000 {
        "Your about section has a good length."
    } else {
        "Your about section is comprehensive. Make sure it stays focused and relevant."
    };
    card.award(Category::Completeness, completeness, length_feedback);

    let signals = rules.storytelling.distinct_hits(about);
    let impact = (signals as f64 * POINTS_PER_STORY_SIGNAL).min(CATEGORY_MAX);
    if signals >= 5 {
        card.award(Category::Impact, impact, "Good use of storytelling in your about section.");
    } else {
        card.award(
            Category::Impact,
            impact,
            "Your about section could benefit from more storytelling elements to engage readers.",
        );
    }

    let words = about.split_whitespace().count();
    let keywords = (words as f64 / WORDS_PER_KEYWORD_POINT).min(CATEGORY_MAX);
    card.award(
        Category::Keywords,
        keywords,
        format!("Your about section has {} words to carry searchable terms.", words),
    );

    if is_first_person(about) {
        card.award(
            Category::Relevance,
            FIRST_PERSON_RELEVANCE,
            "Good use of first-person narrative in your about section.",
        );
    } else {
        card.award(
            Category::Relevance,
            IMPERSONAL_RELEVANCE,
            "Consider using first-person narrative for a more personal touch.",
        );
    }

    card.finish(Section::About)
}

fn is_first_person(text: &str) -> bool {
    text.contains("I am") || text.contains("I have") || text.contains("I ")
}
