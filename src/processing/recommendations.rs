//! Overall recommendations derived from a scored profile

use crate::processing::bands::Bands;
use crate::processing::scores::{Section, SectionResult};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileStanding {
    NeedsRewrite,
    Average,
    Strong,
}

const STANDING_BANDS: Bands<f64, ProfileStanding> = Bands::new(
    &[(40.0, ProfileStanding::NeedsRewrite), (70.0, ProfileStanding::Average)],
    ProfileStanding::Strong,
);

impl ProfileStanding {
    fn guidance(&self) -> [&'static str; 3] {
        match self {
            ProfileStanding::NeedsRewrite => [
                "Your profile needs significant improvement across multiple sections.",
                "Consider rewriting key sections and adding more detailed information about your experience and skills.",
                "Look at profiles of professionals in your field for inspiration.",
            ],
            ProfileStanding::Average => [
                "Your profile is average. With some targeted improvements, you can make it stand out more.",
                "Focus on quantifying achievements and adding more specific details to your experiences.",
                "Ensure all sections are complete and tell a cohesive professional story.",
            ],
            ProfileStanding::Strong => [
                "Your profile is strong overall. Fine-tune to maintain your competitive edge.",
                "Continue to update regularly with new achievements and skills.",
                "Consider getting more recommendations and endorsements to further validate your expertise.",
            ],
        }
    }
}

/// The lowest-scoring section. Ties go to the section analyzed first.
pub fn weakest_section(sections: &BTreeMap<Section, SectionResult>) -> Option<Section> {
    let mut ranked: Vec<(Section, f64)> = sections
        .iter()
        .map(|(section, result)| (*section, result.score))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.first().map(|(section, _)| *section)
}

/// One priority line naming the weakest section, followed by three lines
/// chosen by the overall score band.
pub fn generate(sections: &BTreeMap<Section, SectionResult>, overall_score: f64) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(4);

    if let Some(section) = weakest_section(sections) {
        recommendations.push(format!(
            "Focus on improving your {} section as a priority.",
            section
        ));
    }

    recommendations.extend(
        STANDING_BANDS
            .lookup(overall_score)
            .guidance()
            .iter()
            .map(|line| line.to_string()),
    );

    recommendations
}
