//! Catalog item (case study or insight) used by the related content ranker.

use crate::domain::ContentId;
use serde::{Deserialize, Serialize};

/// A case study or insight from the site catalog.
///
/// `service_type` and `category` are free-form strings from the seed data
/// (`"web_development"`, `"Web Development"`) and are compared verbatim.
/// `technologies` distinguishes "no technology set" (`None`) from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ContentId,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    pub service_type: String,

    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,

    #[serde(default)]
    pub featured: bool,
}

impl ContentItem {
    /// Create an item with no tags, client or title.
    pub fn new(id: ContentId, service_type: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: String::new(),
            summary: None,
            service_type: service_type.into(),
            category: category.into(),
            client: None,
            skills: Vec::new(),
            technologies: None,
            featured: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = Some(technologies.into_iter().map(Into::into).collect());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Client name, or `None` when absent or empty.
    pub fn client_name(&self) -> Option<&str> {
        self.client.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_seed_entry() {
        let json = r#"{
            "id": "cs-portal",
            "title": "Supplier portal",
            "serviceType": "web_development",
            "category": "Web Development",
            "client": "Acme",
            "skills": ["SEO", "Hosting"],
            "featured": true
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "cs-portal");
        assert_eq!(item.service_type, "web_development");
        assert_eq!(item.skills, vec!["SEO", "Hosting"]);
        assert!(item.technologies.is_none());
        assert!(item.featured);
    }

    #[test]
    fn test_empty_client_is_no_client() {
        let id = ContentId::new("cs-1").unwrap();
        let item = ContentItem::new(id, "consultation", "Advisory").with_client("");
        assert_eq!(item.client_name(), None);
    }
}
