//! Profile data model, scoring primitives and the scoring engine

pub mod aggregator;
pub mod analyzer;
pub mod bands;
pub mod keywords;
pub mod profile;
pub mod recommendations;
pub mod scores;
pub mod suggestions;
pub mod text_processor;
