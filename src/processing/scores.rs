//! Section and category score types

use crate::processing::bands::{Tier, ASSESSMENT_TIERS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ceiling for any single category, per section and after aggregation.
pub const CATEGORY_MAX: f64 = 25.0;
/// Ceiling for a section score.
pub const SECTION_MAX: f64 = 100.0;

/// Profile sections, declared in analysis order. The derived ordering is the
/// tie-break order used when ranking sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Headline,
    About,
    Experience,
    Education,
    Skills,
    Certifications,
    Recommendations,
    Visuals,
    Featured,
    Activity,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Headline,
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Certifications,
        Section::Recommendations,
        Section::Visuals,
        Section::Featured,
        Section::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Headline => "headline",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
            Section::Recommendations => "recommendations",
            Section::Visuals => "visuals",
            Section::Featured => "featured",
            Section::Activity => "activity",
        }
    }

    /// How feedback sentences refer to the section.
    fn phrase(&self) -> &'static str {
        match self {
            Section::Headline => "headline",
            Section::About => "about section",
            Section::Experience => "experience section",
            Section::Education => "education section",
            Section::Skills => "skills section",
            Section::Certifications => "certifications section",
            Section::Recommendations => "recommendations section",
            Section::Visuals => "visual presentation",
            Section::Featured => "featured section",
            Section::Activity => "activity",
        }
    }
}

impl Section {
    /// Closing line for a tier. Sections with their own wording use it;
    /// the rest share one template.
    fn assessment(&self, tier: Tier) -> String {
        let worded = match (self, tier) {
            (Section::Headline, Tier::NeedsWork) => {
                Some("Your headline needs significant improvement to attract attention.")
            }
            (Section::Headline, Tier::Excellent) => {
                Some("Your headline is excellent and likely to catch attention.")
            }
            (Section::About, Tier::Excellent) => {
                Some("Your about section is excellent and likely to engage readers.")
            }
            (Section::Experience, Tier::Excellent) => Some(
                "Your experience section is excellent and effectively showcases your professional journey.",
            ),
            (Section::Education, Tier::NeedsWork) => Some("Your education section needs improvement."),
            (Section::Education, Tier::Basic) => {
                Some("Your education section is adequate but could be enhanced.")
            }
            (Section::Education, Tier::Good) => {
                Some("Your education section is good with minor room for improvement.")
            }
            (Section::Education, Tier::Excellent) => Some(
                "Your education section is excellent and effectively showcases your academic background.",
            ),
            (Section::Skills, Tier::Basic) => {
                Some("Your skills section is basic and could be more comprehensive.")
            }
            (Section::Skills, Tier::Good) => Some("Your skills section is good but could be more strategic."),
            (Section::Skills, Tier::Excellent) => Some(
                "Your skills section is excellent and strategically positions you in your field.",
            ),
            _ => None,
        };
        if let Some(line) = worded {
            return line.to_string();
        }

        let phrase = self.phrase();
        match tier {
            Tier::NeedsWork => format!("Your {} needs significant improvement.", phrase),
            Tier::Basic => format!("Your {} is basic and could be more compelling.", phrase),
            Tier::Good => format!("Your {} is good but has room for improvement.", phrase),
            Tier::Excellent => format!("Your {} is excellent and likely to stand out.", phrase),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Completeness,
    Relevance,
    Impact,
    Keywords,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Completeness,
        Category::Relevance,
        Category::Impact,
        Category::Keywords,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub completeness: f64,
    pub relevance: f64,
    pub impact: f64,
    pub keywords: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Completeness => self.completeness,
            Category::Relevance => self.relevance,
            Category::Impact => self.impact,
            Category::Keywords => self.keywords,
        }
    }

    fn slot(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Completeness => &mut self.completeness,
            Category::Relevance => &mut self.relevance,
            Category::Impact => &mut self.impact,
            Category::Keywords => &mut self.keywords,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    pub score: f64,
    pub feedback: Vec<String>,
    pub category_scores: CategoryScores,
}

impl SectionResult {
    /// Result for a section with no data: zero everywhere and one line
    /// explaining why the section matters.
    pub fn absent(explanation: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            feedback: vec![explanation.into()],
            category_scores: CategoryScores::default(),
        }
    }
}

/// Accumulates rule outcomes for one section.
#[derive(Debug, Default)]
pub struct ScoreCard {
    scores: CategoryScores,
    feedback: Vec<String>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule's contribution. The rule is capped at the category
    /// ceiling and so is the running category total.
    pub fn award(&mut self, category: Category, points: f64, feedback: impl Into<String>) -> &mut Self {
        self.credit(category, points);
        self.feedback.push(feedback.into());
        self
    }

    /// Record a contribution that carries no feedback of its own.
    pub fn credit(&mut self, category: Category, points: f64) -> &mut Self {
        let slot = self.scores.slot(category);
        *slot = (*slot + points.clamp(0.0, CATEGORY_MAX)).min(CATEGORY_MAX);
        self
    }

    pub fn scores(&self) -> &CategoryScores {
        &self.scores
    }

    /// Close the section: clamp the score and append the tier assessment.
    pub fn finish(mut self, section: Section) -> SectionResult {
        let score = self.scores.total().min(SECTION_MAX);
        self.feedback.push(section.assessment(ASSESSMENT_TIERS.lookup(score)));

        SectionResult {
            score,
            feedback: self.feedback,
            category_scores: self.scores,
        }
    }
}
