//! Section analyzers
//!
//! Each analyzer is a pure function of one slice of the profile. Missing or
//! empty input short-circuits to a zero score with a single explanatory line;
//! otherwise every rule contributes to one category and leaves feedback, and
//! a closing assessment is appended last.

pub mod about;
pub mod counted;
pub mod education;
pub mod experience;
pub mod headline;
pub mod skills;
pub mod visuals;

use crate::processing::keywords::ScoringRules;
use crate::processing::profile::ProfileRecord;
use crate::processing::scores::{Section, SectionResult};

/// Run the analyzer responsible for `section`.
pub fn analyze_section(section: Section, profile: &ProfileRecord, rules: &ScoringRules) -> SectionResult {
    match section {
        Section::Headline => headline::analyze(profile.headline_text(), rules),
        Section::About => about::analyze(profile.about_text(), rules),
        Section::Experience => experience::analyze(profile.experience.as_deref(), rules),
        Section::Education => education::analyze(profile.education.as_deref()),
        Section::Skills => skills::analyze(profile.skills.as_deref(), rules),
        Section::Certifications => counted::CERTIFICATIONS.analyze(profile.certifications.as_deref()),
        Section::Recommendations => counted::RECOMMENDATIONS.analyze(profile.recommendations.as_deref()),
        Section::Visuals => visuals::analyze(profile.visuals.as_ref()),
        Section::Featured => counted::FEATURED.analyze(profile.featured.as_deref()),
        Section::Activity => counted::ACTIVITY.analyze(profile.activity.as_deref()),
    }
}
