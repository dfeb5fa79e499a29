//! Headline analysis

use crate::processing::bands::Bands;
use crate::processing::keywords::ScoringRules;
use crate::processing::scores::{Category, ScoreCard, Section, SectionResult, CATEGORY_MAX};

const LENGTH_BANDS: Bands<usize, f64> = Bands::new(&[(11, 0.0), (31, 15.0)], 25.0);
const POINTS_PER_KEYWORD: f64 = 8.0;
const HIGHLIGHTED_IMPACT: f64 = 25.0;
const PLAIN_IMPACT: f64 = 10.0;

pub fn analyze(headline: Option<&str>, rules: &ScoringRules) -> SectionResult {
    let Some(headline) = headline.filter(|h| !h.trim().is_empty()) else {
        return SectionResult::absent(
            "Your headline is missing. It is the first thing visitors and recruiters see in search results.",
        );
    };

    let mut card = ScoreCard::new();

    let completeness = LENGTH_BANDS.lookup(headline.chars().count());
    if completeness >= CATEGORY_MAX {
        card.award(Category::Completeness, completeness, "Your headline has a good, descriptive length.");
    } else if completeness > 0.0 {
        card.award(
            Category::Completeness,
            completeness,
            "Your headline is fairly short. Use the space to describe your value, not just your title.",
        );
    } else {
        card.award(
            Category::Completeness,
            completeness,
            "Your headline is too short. Add more relevant information.",
        );
    }

    let hits = rules.headline_keywords.distinct_hits(headline);
    let keywords = (hits as f64 * POINTS_PER_KEYWORD).min(CATEGORY_MAX);
    if hits > 0 {
        card.award(
            Category::Keywords,
            keywords,
            format!("Your headline contains {} industry-relevant keyword(s).", hits),
        );
    } else {
        card.award(
            Category::Keywords,
            keywords,
            "Consider adding industry-relevant keywords to your headline.",
        );
    }

    if rules.headline_highlights.matches(headline) {
        card.award(
            Category::Impact,
            HIGHLIGHTED_IMPACT,
            "Good use of special characters to make your headline stand out.",
        );
    } else {
        card.award(
            Category::Impact,
            PLAIN_IMPACT,
            "Consider using separators (|, •) to structure your headline and make it more scannable.",
        );
    }

    // No target role is known; keyword strength stands in for fit.
    let relevance_feedback = if hits > 0 {
        "Role keywords help your headline match recruiter searches."
    } else {
        "Without role keywords your headline is unlikely to match recruiter searches."
    };
    card.award(
        Category::Relevance,
        (keywords / CATEGORY_MAX * CATEGORY_MAX).min(CATEGORY_MAX),
        relevance_feedback,
    );

    card.finish(Section::Headline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_engineer_headline_with_separator() {
        let rules = ScoringRules::default();
        let result = analyze(Some("Senior Software Engineer | Cloud Platforms ★"), &rules);

        assert_eq!(result.category_scores.completeness, 25.0);
        assert_eq!(result.category_scores.keywords, 8.0);
        assert_eq!(result.category_scores.impact, 25.0);
        assert_eq!(result.category_scores.relevance, 8.0);
        assert_eq!(result.score, 66.0);
        // length, keywords, separators, relevance, closing assessment
        assert_eq!(result.feedback.len(), 5);
        assert_eq!(
            result.feedback.last().unwrap(),
            "Your headline is good but has room for improvement."
        );
    }

    #[test]
    fn test_missing_headline_short_circuits() {
        let rules = ScoringRules::default();
        for headline in [None, Some(""), Some("   ")] {
            let result = analyze(headline, &rules);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.feedback.len(), 1);
            assert_eq!(result.category_scores.total(), 0.0);
        }
    }

    #[rstest]
    #[case("Engineer", 0.0)]
    #[case("Data person", 15.0)]
    #[case("Exactly thirty characters long", 15.0)]
    #[case("Thirty-one characters long here", 25.0)]
    fn test_length_bands(#[case] headline: &str, #[case] expected: f64) {
        let rules = ScoringRules::default();
        let result = analyze(Some(headline), &rules);
        assert_eq!(result.category_scores.completeness, expected);
    }

    #[test]
    fn test_keyword_points_are_capped() {
        let rules = ScoringRules::default();
        let result = analyze(
            Some("Expert engineer, developer, consultant and strategist"),
            &rules,
        );
        assert_eq!(result.category_scores.keywords, 25.0);
        assert_eq!(result.category_scores.relevance, 25.0);
        assert_eq!(result.category_scores.impact, 10.0);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let rules = ScoringRules::default();
        // Ten characters, thirty bytes.
        let result = analyze(Some("★★★★★★★★★★"), &rules);
        assert_eq!(result.category_scores.completeness, 0.0);
    }
}
