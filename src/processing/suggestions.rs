//! Post ideas tailored to a profile's industry, skills and current role

use crate::config::SuggestionConfig;
use crate::processing::profile::ProfileRecord;
use log::debug;
use std::collections::HashSet;

const GENERAL_IDEAS: [&str; 7] = [
    "Share your professional journey and key milestones",
    "Write about a mistake you made and what you learned from it",
    "Create a post celebrating a colleague or mentor who has influenced your career",
    "Share your thoughts on remote work or work-life balance",
    "Write about books or resources that have helped your professional development",
    "Create a poll asking your network about challenges they face in your industry",
    "Share an infographic about key trends in your field",
];

pub struct ContentSuggester {
    max_suggestions: usize,
    top_skills: usize,
}

impl ContentSuggester {
    pub fn new(config: &SuggestionConfig) -> Self {
        Self {
            max_suggestions: config.max_suggestions,
            top_skills: config.top_skills,
        }
    }

    /// Ideas in template order: industry, leading skills, most recent role,
    /// then general ideas. Duplicates keep their first position.
    pub fn suggest(&self, profile: &ProfileRecord) -> Vec<String> {
        let mut ideas = Vec::new();

        if let Some(industry) = filled(profile.industry.as_deref()) {
            ideas.push(format!("Share your insights on the latest trends in {}", industry));
            ideas.push(format!(
                "Write about challenges facing professionals in {} and how to overcome them",
                industry
            ));
            ideas.push(format!("Create a post comparing different career paths within {}", industry));
        }

        for skill in profile.listed_skills().take(self.top_skills) {
            ideas.push(format!(
                "Share a case study demonstrating how you've applied {} in your work",
                skill
            ));
            ideas.push(format!("Create a 'tips and tricks' post about {}", skill));
            ideas.push(format!(
                "Write about how {} is evolving and what professionals should know",
                skill
            ));
        }

        let latest_role = profile
            .experience
            .as_ref()
            .and_then(|entries| entries.first())
            .and_then(|entry| filled(entry.title.as_deref()));
        if let Some(role) = latest_role {
            ideas.push(format!("Share a 'day in the life' post about your role as a {}", role));
            ideas.push(format!(
                "Discuss a challenging project you worked on in your role as {}",
                role
            ));
            ideas.push(format!(
                "Create a post about lessons learned in your journey to becoming a {}",
                role
            ));
        }

        ideas.extend(GENERAL_IDEAS.iter().map(|idea| idea.to_string()));

        let mut seen = HashSet::new();
        ideas.retain(|idea| seen.insert(idea.clone()));
        ideas.truncate(self.max_suggestions);

        debug!("Generated {} content suggestions", ideas.len());
        ideas
    }
}

impl Default for ContentSuggester {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            top_skills: 5,
        }
    }
}

fn filled(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
