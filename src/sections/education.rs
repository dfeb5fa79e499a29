//! Education analysis

use crate::processing::profile::EducationEntry;
use crate::processing::scores::{Category, ScoreCard, Section, SectionResult};

const COMPLETE_ENTRIES: f64 = 25.0;
const PARTIAL_ENTRIES: f64 = 12.0;
const DETAILED_IMPACT: f64 = 25.0;
const UNDETAILED_IMPACT: f64 = 10.0;
const DETAIL_MIN_CHARS: usize = 50;
const RECENT_RELEVANCE: f64 = 15.0;
const BASELINE_RELEVANCE: f64 = 15.0;
const EDUCATION_KEYWORDS: f64 = 15.0;

pub fn analyze(education: Option<&[EducationEntry]>) -> SectionResult {
    let Some(entries) = education.filter(|e| !e.is_empty()) else {
        return SectionResult::absent(
            "Your education section is empty. Consider adding your educational background.",
        );
    };

    let mut card = ScoreCard::new();

    if entries.iter().all(EducationEntry::is_complete) {
        card.award(
            Category::Completeness,
            COMPLETE_ENTRIES,
            "Your education entries are complete with all relevant information.",
        );
    } else {
        card.award(
            Category::Completeness,
            PARTIAL_ENTRIES,
            "Some of your education entries are missing information. Consider completing them.",
        );
    }

    let detailed = entries.iter().any(|e| {
        e.description
            .as_deref()
            .is_some_and(|d| d.chars().count() > DETAIL_MIN_CHARS)
    });
    if detailed {
        card.award(
            Category::Impact,
            DETAILED_IMPACT,
            "Good job including details about your educational activities and achievements.",
        );
    } else {
        card.award(
            Category::Impact,
            UNDETAILED_IMPACT,
            "Consider adding descriptions to your education entries highlighting relevant coursework, achievements, or activities.",
        );
    }

    // Recency is not evaluated; both paths carry the same weight.
    if has_recent_education(entries) {
        card.award(
            Category::Relevance,
            RECENT_RELEVANCE,
            "Your commitment to continuous learning is evident from your recent education.",
        );
    } else {
        card.award(
            Category::Relevance,
            BASELINE_RELEVANCE,
            "Consider adding recent courses or certifications to demonstrate continuous learning.",
        );
    }

    card.credit(Category::Keywords, EDUCATION_KEYWORDS);

    card.finish(Section::Education)
}

fn has_recent_education(_entries: &[EducationEntry]) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::profile::{DateValue, PartialDate, ProfileRecord};
    use serde_json::json;

    fn complete_entry(description: Option<&str>) -> EducationEntry {
        let year = |y| Some(DateValue::Parts(PartialDate::year(y)));
        EducationEntry {
            school: Some("University of Technology".to_string()),
            degree: Some("Bachelor's Degree".to_string()),
            field_of_study: Some("Computer Science".to_string()),
            description: description.map(str::to_string),
            start_date: year(2011),
            end_date: year(2015),
        }
    }

    #[test]
    fn test_complete_detailed_education() {
        let entries = vec![complete_entry(Some(
            "Graduated with honors. Active in coding club and hackathons.",
        ))];
        let result = analyze(Some(entries.as_slice()));

        assert_eq!(result.category_scores.completeness, 25.0);
        assert_eq!(result.category_scores.impact, 25.0);
        assert_eq!(result.category_scores.relevance, 15.0);
        assert_eq!(result.category_scores.keywords, 15.0);
        assert_eq!(result.score, 80.0);
    }

    #[test]
    fn test_one_incomplete_entry_lowers_completeness() {
        let mut partial = complete_entry(None);
        partial.field_of_study = None;
        let entries = vec![complete_entry(None), partial];

        let result = analyze(Some(entries.as_slice()));
        assert_eq!(result.category_scores.completeness, 12.0);
        assert_eq!(result.category_scores.impact, 10.0);
        assert_eq!(result.score, 12.0 + 10.0 + 15.0 + 15.0);
    }

    #[test]
    fn test_description_must_exceed_fifty_characters() {
        let entries = vec![complete_entry(Some(&"x".repeat(50)))];
        let result = analyze(Some(entries.as_slice()));
        assert_eq!(result.category_scores.impact, 10.0);
    }

    #[test]
    fn test_missing_education() {
        let result = analyze(None);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.feedback.len(), 1);
    }

    #[test]
    fn test_text_dates_count_as_complete() {
        let record = ProfileRecord::from_value(&json!({
            "education": [{
                "school": "State University",
                "degree": "BSc",
                "field_of_study": "Mathematics",
                "start_date": "2011",
                "end_date": "2015-06"
            }]
        }))
        .unwrap();

        let result = analyze(record.education.as_deref());
        assert_eq!(result.category_scores.completeness, 25.0);
    }

    #[test]
    fn test_blank_text_date_is_incomplete() {
        let mut entry = complete_entry(None);
        entry.end_date = Some(DateValue::Text(" ".to_string()));
        let result = analyze(Some(&[entry][..]));
        assert_eq!(result.category_scores.completeness, 12.0);
    }
}
