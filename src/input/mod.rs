//! Input handling
//! File detection, text extraction, and the profile sources the engine reads from

pub mod file_detector;
pub mod manager;
pub mod profile_source;
pub mod text_extractor;

pub use manager::InputManager;
pub use profile_source::{DemoProfileSource, JsonFileSource, ProfileSource};
