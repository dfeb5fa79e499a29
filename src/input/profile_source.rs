//! Profile sources
//!
//! Anything that can produce a [`ProfileRecord`]: a JSON file on disk, or the
//! built-in demo records used when no live profile is available.

use crate::error::{ProfileScorerError, Result};
use crate::input::manager::InputManager;
use crate::processing::profile::ProfileRecord;
use log::info;
use serde_json::json;
use std::path::PathBuf;

pub trait ProfileSource {
    fn load(&mut self) -> impl std::future::Future<Output = Result<ProfileRecord>> + Send;

    /// Short label recorded in report metadata.
    fn describe(&self) -> String;
}

pub struct JsonFileSource {
    path: PathBuf,
    manager: InputManager,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            manager: InputManager::new(),
        }
    }
}

impl ProfileSource for JsonFileSource {
    async fn load(&mut self) -> Result<ProfileRecord> {
        self.manager.load_profile(&self.path).await
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

const FEATURED_HANDLE: &str = "williamhgates";

/// Deterministic sample profiles keyed by handle.
pub struct DemoProfileSource {
    handle: String,
}

impl DemoProfileSource {
    pub fn new(handle: impl Into<String>) -> Self {
        Self { handle: handle.into() }
    }

    pub fn from_url(url: &str) -> Result<Self> {
        Ok(Self::new(profile_handle_from_url(url)?))
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    fn raw_record(&self) -> serde_json::Value {
        if self.handle == FEATURED_HANDLE {
            json!({
                "public_identifier": self.handle,
                "full_name": "Bill Gates",
                "headline": "Co-chair, Bill & Melinda Gates Foundation",
                "summary": "Co-chair of the Bill & Melinda Gates Foundation. Founder of Breakthrough Energy. \
                            Co-founder of Microsoft. Voracious reader. Avid traveler.",
                "experience": [
                    {
                        "company": "Bill & Melinda Gates Foundation",
                        "title": "Co-chair",
                        "description": "Leading the development of key features and improving application performance.",
                        "location": "Seattle, WA",
                        "starts_at": { "month": 6, "year": 2018 },
                        "ends_at": null
                    },
                    {
                        "company": "Microsoft",
                        "title": "CEO",
                        "description": "Worked on front-end development and user experience design.",
                        "location": "Redmond, WA",
                        "starts_at": { "month": 1, "year": 2015 },
                        "ends_at": { "month": 5, "year": 2018 }
                    }
                ],
                "education": [{
                    "school": "Harvard University",
                    "degree": "Bachelor of Arts",
                    "field_of_study": "Applied Mathematics",
                    "description": "Graduated with honors. Active in coding club and hackathons.",
                    "start_date": { "year": 2011 },
                    "end_date": { "year": 2015 }
                }],
                "skills": [
                    "Business Strategy", "Leadership", "Philanthropy", "Technology",
                    "Innovation", "Public Speaking", "Global Health"
                ],
                "industry": "Philanthropy"
            })
        } else {
            json!({
                "public_identifier": self.handle,
                "full_name": "John Doe",
                "headline": "Software Developer at Tech Company",
                "summary": "Experienced software developer with a passion for creating innovative solutions.",
                "experience": [
                    {
                        "company": "Tech Company",
                        "title": "Senior Software Developer",
                        "description": "Leading the development of key features and improving application performance.",
                        "location": "San Francisco, CA",
                        "starts_at": { "month": 6, "year": 2018 },
                        "ends_at": null
                    },
                    {
                        "company": "Startup Inc.",
                        "title": "Junior Developer",
                        "description": "Worked on front-end development and user experience design.",
                        "location": "San Francisco, CA",
                        "starts_at": { "month": 1, "year": 2015 },
                        "ends_at": { "month": 5, "year": 2018 }
                    }
                ],
                "education": [{
                    "school": "University of Technology",
                    "degree": "Bachelor's Degree",
                    "field_of_study": "Computer Science",
                    "description": "Graduated with honors. Active in coding club and hackathons.",
                    "start_date": { "year": 2011 },
                    "end_date": { "year": 2015 }
                }],
                "skills": ["JavaScript", "React", "Node.js", "Python", "SQL", "Git", "AWS"],
                "industry": "Computer Software"
            })
        }
    }
}

impl ProfileSource for DemoProfileSource {
    async fn load(&mut self) -> Result<ProfileRecord> {
        info!("Building demo profile for: {}", self.handle);
        ProfileRecord::from_value(&self.raw_record())
    }

    fn describe(&self) -> String {
        format!("demo:{}", self.handle)
    }
}

/// Pull the handle out of `…linkedin.com/in/<handle>[/…][?…]`.
pub fn profile_handle_from_url(url: &str) -> Result<String> {
    const MARKER: &str = "linkedin.com/in/";

    let handle = url
        .find(MARKER)
        .map(|start| &url[start + MARKER.len()..])
        .and_then(|rest| rest.split(['/', '?']).next())
        .filter(|handle| !handle.is_empty());

    match handle {
        Some(handle) => Ok(handle.to_string()),
        None => Err(ProfileScorerError::InvalidInput(
            "Invalid LinkedIn URL format".to_string(),
        )),
    }
}
