//! Input manager for profile records and resume documents

use crate::error::{ProfileScorerError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::profile::ProfileRecord;
use log::{info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read resume text from a txt, md or pdf file.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let file_type = self.detect_file_type(path)?;
        if !file_type.is_document() {
            return Err(ProfileScorerError::UnsupportedFormat(format!(
                "Cannot extract resume text from: {}",
                path.display()
            )));
        }
        let text = self.read_cached(path, file_type).await?;
        if text.trim().is_empty() {
            warn!("No text extracted from {}", path.display());
        }
        Ok(text)
    }

    /// Load and parse a profile record from a JSON file.
    pub async fn load_profile(&mut self, path: &Path) -> Result<ProfileRecord> {
        let file_type = self.detect_file_type(path)?;
        if file_type != FileType::Json {
            return Err(ProfileScorerError::UnsupportedFormat(format!(
                "Profile records must be JSON: {}",
                path.display()
            )));
        }

        let raw = self.read_cached(path, file_type).await?;
        let profile = ProfileRecord::from_json_str(&raw)?;
        info!("Loaded profile record from: {}", path.display());
        Ok(profile)
    }

    async fn read_cached(&mut self, path: &Path, file_type: FileType) -> Result<String> {
        if self.enable_cache {
            if let Some(cached) = self.cache.get(path) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ProfileScorerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Text | FileType::Json => {
                info!("Reading file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ProfileScorerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            ProfileScorerError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_profile_load_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{ "headline": "Engineer" }"#).unwrap();

        let mut manager = InputManager::new();
        let profile = manager.load_profile(&path).await.unwrap();
        assert_eq!(profile.headline.as_deref(), Some("Engineer"));
        assert_eq!(manager.cache_size(), 1);

        std::fs::remove_file(&path).unwrap();
        assert!(manager.load_profile(&path).await.is_ok());

        manager.clear_cache();
        assert!(manager.load_profile(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_invalid_input() {
        let mut manager = InputManager::new().with_cache(false);
        let err = manager.load_profile(Path::new("/nonexistent/profile.json")).await.unwrap_err();
        assert!(matches!(err, ProfileScorerError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_wrong_kind_of_file_is_rejected() {
        let mut manager = InputManager::new();
        let err = manager.load_profile(Path::new("resume.txt")).await.unwrap_err();
        assert!(matches!(err, ProfileScorerError::UnsupportedFormat(_)));

        let err = manager.extract_text(Path::new("profile.json")).await.unwrap_err();
        assert!(matches!(err, ProfileScorerError::UnsupportedFormat(_)));
    }
}
