//! Sections scored only by how many items they hold: certifications,
//! recommendations, featured content and activity.

use crate::processing::bands::Bands;
use crate::processing::scores::{Category, ScoreCard, Section, SectionResult, CATEGORY_MAX};

const COUNT_BANDS: Bands<usize, f64> = Bands::new(&[(2, 10.0), (4, 20.0)], 25.0);
const PLACEHOLDER_RELEVANCE: f64 = 15.0;
const PLACEHOLDER_KEYWORDS: f64 = 15.0;

/// Per-section wording and impact multiplier.
#[derive(Debug, Clone, Copy)]
pub struct CountedSection {
    pub section: Section,
    pub impact_per_item: f64,
    noun: &'static str,
    missing: &'static str,
}

pub const CERTIFICATIONS: CountedSection = CountedSection {
    section: Section::Certifications,
    impact_per_item: 5.0,
    noun: "certification",
    missing: "You haven't listed any certifications. Certifications validate your expertise and help you appear in recruiter searches.",
};

pub const RECOMMENDATIONS: CountedSection = CountedSection {
    section: Section::Recommendations,
    impact_per_item: 6.0,
    noun: "recommendation",
    missing: "You don't have any recommendations. Recommendations from colleagues build trust with people viewing your profile.",
};

pub const FEATURED: CountedSection = CountedSection {
    section: Section::Featured,
    impact_per_item: 5.0,
    noun: "featured item",
    missing: "Your featured section is empty. Featured posts, articles and projects show your work instead of describing it.",
};

pub const ACTIVITY: CountedSection = CountedSection {
    section: Section::Activity,
    impact_per_item: 6.0,
    noun: "recent activity item",
    missing: "You have no recent activity. Regular posts and comments keep your profile visible in your network.",
};

impl CountedSection {
    pub fn analyze<T>(&self, items: Option<&[T]>) -> SectionResult {
        let count = items.map_or(0, <[T]>::len);
        if count == 0 {
            return SectionResult::absent(self.missing);
        }

        let mut card = ScoreCard::new();

        let plural = if count == 1 { "" } else { "s" };
        let count_feedback = if count < 4 {
            format!("You have {} {}{}. Adding a few more would strengthen this section.", count, self.noun, plural)
        } else {
            format!("You have {} {}s, a strong showing for this section.", count, self.noun)
        };
        card.award(Category::Completeness, COUNT_BANDS.lookup(count), count_feedback);

        let impact = (count as f64 * self.impact_per_item).min(CATEGORY_MAX);
        let impact_feedback = if impact >= CATEGORY_MAX {
            format!("Your {}s carry full weight with profile visitors.", self.noun)
        } else {
            format!(
                "Each {} adds weight with profile visitors ({:.0} of {:.0} impact points so far).",
                self.noun, impact, CATEGORY_MAX
            )
        };
        card.award(Category::Impact, impact, impact_feedback);
        card.credit(Category::Relevance, PLACEHOLDER_RELEVANCE);
        card.credit(Category::Keywords, PLACEHOLDER_KEYWORDS);

        card.finish(self.section)
    }
}
