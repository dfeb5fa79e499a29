//! Cross-section aggregation of category scores

use crate::processing::scores::{Category, CategoryScores, SectionResult, CATEGORY_MAX};
use std::collections::HashMap;

/// Average each category over the sections that reported it.
///
/// The divisor is the number of contributing sections for that category,
/// not a fixed section count.
pub fn aggregate<'a>(results: impl IntoIterator<Item = &'a SectionResult>) -> CategoryScores {
    let mut totals: HashMap<Category, (f64, usize)> = HashMap::new();
    for result in results {
        for (category, value) in result.category_scores.iter() {
            let entry = totals.entry(category).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    let mean = |category: Category| match totals.get(&category) {
        Some(&(sum, count)) if count > 0 => (sum / count as f64).clamp(0.0, CATEGORY_MAX),
        _ => 0.0,
    };

    CategoryScores {
        completeness: mean(Category::Completeness),
        relevance: mean(Category::Relevance),
        impact: mean(Category::Impact),
        keywords: mean(Category::Keywords),
    }
}

/// The overall score is the plain sum of the four aggregated categories.
pub fn overall_score(categories: &CategoryScores) -> f64 {
    categories.total()
}
