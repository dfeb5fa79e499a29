//! Profile image and banner analysis

use crate::processing::profile::Visuals;
use crate::processing::scores::{Category, ScoreCard, Section, SectionResult};

const PROFILE_IMAGE_POINTS: f64 = 15.0;
const BANNER_POINTS: f64 = 10.0;

pub fn analyze(visuals: Option<&Visuals>) -> SectionResult {
    let visuals = visuals.copied().unwrap_or_default();
    if !visuals.has_profile_image && !visuals.has_banner {
        return SectionResult::absent(
            "Your profile has no photo or banner. Profiles with a photo receive far more views and connection requests.",
        );
    }

    let mut card = ScoreCard::new();

    // At least one image is present past the check above.
    let (completeness, feedback) = if !visuals.has_profile_image {
        (10.0, "Add a professional profile photo. It is the first thing people notice.")
    } else if !visuals.has_banner {
        (15.0, "Add a banner image to reinforce your personal brand.")
    } else {
        (25.0, "Your profile has both a photo and a banner image.")
    };
    card.award(Category::Completeness, completeness, feedback);

    let signal = flag(visuals.has_profile_image) * PROFILE_IMAGE_POINTS
        + flag(visuals.has_banner) * BANNER_POINTS;
    let impact_feedback = if visuals.has_profile_image {
        "Your photo makes the profile memorable to visitors."
    } else {
        "Your banner gives visitors a first impression, but a photo matters more."
    };
    card.award(Category::Impact, signal, impact_feedback);
    card.award(
        Category::Relevance,
        signal,
        "Images that match your field help visitors place you quickly.",
    );
    // Keywords do not apply to images.
    card.credit(Category::Keywords, 0.0);

    card.finish(Section::Visuals)
}

fn flag(present: bool) -> f64 {
    if present {
        1.0
    } else {
        0.0
    }
}
