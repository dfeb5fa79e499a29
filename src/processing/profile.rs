//! Profile record structures and raw-record mapping

use crate::error::{ProfileScorerError, Result};
use serde::{Deserialize, Serialize};

/// A professional profile as supplied by a profile source.
///
/// Every section is optional. `None` means the source did not provide the
/// section at all, which is scored the same way as an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub public_identifier: Option<String>,
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub about: Option<String>,
    pub summary: Option<String>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Vec<String>>,
    pub certifications: Option<Vec<serde_json::Value>>,
    pub recommendations: Option<Vec<serde_json::Value>>,
    pub visuals: Option<Visuals>,
    pub featured: Option<Vec<serde_json::Value>>,
    pub activity: Option<Vec<serde_json::Value>>,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "starts_at")]
    pub start_date: Option<DateValue>,
    /// Absent for a current position.
    #[serde(alias = "ends_at")]
    pub end_date: Option<DateValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateValue>,
    pub end_date: Option<DateValue>,
}

/// A date as profile sources report it: a bare year, free text such as
/// `"2015-09"`, or an object with any combination of parts known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Year(i64),
    Text(String),
    Parts(PartialDate),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialDate {
    pub year: Option<DatePart>,
    pub month: Option<DatePart>,
    pub day: Option<DatePart>,
}

/// One date component, numeric or textual (`2015` or `"2015"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatePart {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visuals {
    pub has_profile_image: bool,
    pub has_banner: bool,
}

impl DatePart {
    fn is_blank(&self) -> bool {
        match self {
            DatePart::Number(_) => false,
            DatePart::Text(text) => text.trim().is_empty(),
        }
    }
}

impl PartialDate {
    pub fn year(year: i64) -> Self {
        Self {
            year: Some(DatePart::Number(year)),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        [&self.year, &self.month, &self.day]
            .into_iter()
            .all(|part| part.as_ref().map_or(true, DatePart::is_blank))
    }
}

impl DateValue {
    /// No usable date information: blank text or an object with no parts.
    pub fn is_empty(&self) -> bool {
        match self {
            DateValue::Year(_) => false,
            DateValue::Text(text) => text.trim().is_empty(),
            DateValue::Parts(parts) => parts.is_empty(),
        }
    }
}

impl EducationEntry {
    /// School, degree, field of study and both dates are all filled in.
    pub fn is_complete(&self) -> bool {
        let filled = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        let dated = |value: &Option<DateValue>| value.as_ref().is_some_and(|d| !d.is_empty());

        filled(&self.school)
            && filled(&self.degree)
            && filled(&self.field_of_study)
            && dated(&self.start_date)
            && dated(&self.end_date)
    }
}

impl ProfileRecord {
    /// Parse a raw JSON record. Any type mismatch rejects the whole record.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| ProfileScorerError::MalformedInput(e.to_string()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| ProfileScorerError::MalformedInput(e.to_string()))?;
        Self::from_value(&value)
    }

    /// The about text, falling back to `summary` as some sources name it.
    pub fn about_text(&self) -> Option<&str> {
        non_blank(self.about.as_deref()).or_else(|| non_blank(self.summary.as_deref()))
    }

    pub fn headline_text(&self) -> Option<&str> {
        non_blank(self.headline.as_deref())
    }

    /// Skill names with the blank padding some sources add left out.
    pub fn listed_skills(&self) -> impl Iterator<Item = &str> + '_ {
        self.skills
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|skill| !skill.trim().is_empty())
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
