//! Experience analysis

use crate::processing::bands::Bands;
use crate::processing::keywords::ScoringRules;
use crate::processing::profile::ExperienceEntry;
use crate::processing::scores::{Category, ScoreCard, Section, SectionResult};

const COUNT_BANDS: Bands<usize, f64> = Bands::new(&[(2, 5.0), (4, 15.0)], 25.0);
const ACHIEVEMENT_IMPACT: f64 = 25.0;
const DUTY_IMPACT: f64 = 10.0;
const BULLETED_KEYWORDS: f64 = 20.0;
const PROSE_KEYWORDS: f64 = 10.0;
const UNGAPPED_RELEVANCE: f64 = 20.0;

pub fn analyze(experience: Option<&[ExperienceEntry]>, rules: &ScoringRules) -> SectionResult {
    let Some(entries) = experience.filter(|e| !e.is_empty()) else {
        return SectionResult::absent(
            "Your experience section is empty. This is a crucial part of your profile.",
        );
    };

    let mut card = ScoreCard::new();
    let count = entries.len();

    let completeness = COUNT_BANDS.lookup(count);
    let count_feedback = if count < 2 {
        "Consider adding more professional experiences to showcase your career progression."
    } else if count < 4 {
        "You have a good number of experiences listed."
    } else {
        "You have a comprehensive list of experiences. Ensure they're all relevant."
    };
    card.award(Category::Completeness, completeness, count_feedback);

    let descriptions = || entries.iter().filter_map(|e| e.description.as_deref());
    let with_achievements = descriptions()
        .filter(|d| rules.achievement_verbs.matches(d))
        .count();
    let with_bullets = descriptions()
        .filter(|d| rules.bullet_markers.matches(d))
        .count();
    let half = count as f64 / 2.0;

    if with_achievements as f64 >= half {
        card.award(
            Category::Impact,
            ACHIEVEMENT_IMPACT,
            "Good focus on achievements in your experience descriptions.",
        );
    } else {
        card.award(
            Category::Impact,
            DUTY_IMPACT,
            "Focus more on achievements rather than responsibilities in your descriptions.",
        );
    }

    if with_bullets as f64 >= half {
        card.award(
            Category::Keywords,
            BULLETED_KEYWORDS,
            "Good use of bullet points in your experience descriptions.",
        );
    } else {
        card.award(
            Category::Keywords,
            PROSE_KEYWORDS,
            "Consider using bullet points to make your experience descriptions more readable.",
        );
    }

    // Employment gap detection is not performed; every history takes the
    // ungapped path.
    if has_employment_gaps(entries) {
        card.award(
            Category::Relevance,
            0.0,
            "There appear to be gaps in your employment history. Consider explaining these.",
        );
    } else {
        card.credit(Category::Relevance, UNGAPPED_RELEVANCE);
    }

    card.finish(Section::Experience)
}

fn has_employment_gaps(_entries: &[ExperienceEntry]) -> bool {
    false
}
