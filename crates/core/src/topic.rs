//! Topic model - the leaf unit of learning.

use serde::{Deserialize, Serialize};

use crate::error::{require, ModelError, Result};
use crate::id::TopicId;
use crate::Time;

/// A topic is a single thing to learn, with a status and an effort estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Unique identifier
    pub id: TopicId,

    /// Topic title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Search keywords
    pub keywords: Vec<String>,

    /// Intrinsic status assigned when the topic was created
    pub status: TopicStatus,

    /// Estimated effort in hours
    pub estimated_hours: u32,

    /// When created
    pub created_at: Time,

    /// Reference material
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Topic {
    /// Create a topic with a baseline `Future` status and one hour of effort.
    pub fn new(id: TopicId, title: impl Into<String>, created_at: Time) -> Result<Self> {
        let title = title.into();
        require("topic", "title", &title)?;

        Ok(Self {
            id,
            title,
            description: String::new(),
            keywords: Vec::new(),
            status: TopicStatus::Future,
            estimated_hours: 1,
            created_at,
            links: Vec::new(),
        })
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the keywords.
    pub fn with_keywords<I, K>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the intrinsic status.
    pub fn with_status(mut self, status: TopicStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the effort estimate.
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.estimated_hours = hours;
        self
    }

    /// Set the reference links.
    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    /// Check the field rules `new` enforces. Needed for topics built by
    /// deserialization.
    pub fn validate(&self) -> Result<()> {
        require("topic", "title", &self.title)?;
        self.links.iter().try_for_each(Link::validate)
    }
}

/// Where a learner stands on a topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TopicStatus {
    /// Not started yet
    #[default]
    Future,
    /// Currently being learned
    Now,
    /// Done
    Completed,
}

impl TopicStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [TopicStatus; 3] = [TopicStatus::Future, TopicStatus::Now, TopicStatus::Completed];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Future => "Future",
            TopicStatus::Now => "Now",
            TopicStatus::Completed => "Completed",
        }
    }

    /// Whether this status counts toward completion.
    pub fn is_completed(&self) -> bool {
        matches!(self, TopicStatus::Completed)
    }
}

impl std::fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TopicStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "future" => Ok(TopicStatus::Future),
            "now" => Ok(TopicStatus::Now),
            "completed" => Ok(TopicStatus::Completed),
            _ => Err(ModelError::InvalidValue {
                kind: "topic status",
                value: s.to_string(),
            }),
        }
    }
}

/// A reference link attached to a topic or module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display title
    pub title: String,

    /// Target URL
    pub url: String,

    /// Kind of material
    #[serde(rename = "type")]
    pub category: LinkCategory,
}

impl Link {
    /// Create a link, rejecting an empty title or URL.
    pub fn new(title: impl Into<String>, url: impl Into<String>, category: LinkCategory) -> Result<Self> {
        let title = title.into();
        let url = url.into();
        let link = Self { title, url, category };
        link.validate()?;
        Ok(link)
    }

    /// Reject an empty title or URL.
    pub fn validate(&self) -> Result<()> {
        require("link", "title", &self.title)?;
        require("link", "url", &self.url)
    }
}

/// Link categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    /// Official documentation
    Docs,
    /// Source repository
    Github,
    /// Step-by-step tutorial
    Tutorial,
    /// Article or blog post
    Article,
}

impl std::str::FromStr for LinkCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "docs" => Ok(LinkCategory::Docs),
            "github" => Ok(LinkCategory::Github),
            "tutorial" => Ok(LinkCategory::Tutorial),
            "article" => Ok(LinkCategory::Article),
            _ => Err(ModelError::InvalidValue {
                kind: "link category",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_topic_requires_title() {
        let err = Topic::new(TopicId::new("t").unwrap(), " ", Utc::now()).unwrap_err();
        assert_eq!(err, ModelError::EmptyField { entity: "topic", field: "title" });
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!("completed".parse::<TopicStatus>().unwrap(), TopicStatus::Completed);
        assert_eq!("NOW".parse::<TopicStatus>().unwrap(), TopicStatus::Now);
        assert!("done".parse::<TopicStatus>().is_err());
    }

    #[test]
    fn test_topic_json_shape() {
        let topic = Topic::new(TopicId::new("t1").unwrap(), "Flexbox", Utc::now())
            .unwrap()
            .with_hours(3)
            .with_status(TopicStatus::Now)
            .with_links(vec![
                Link::new("MDN", "https://developer.mozilla.org", LinkCategory::Docs).unwrap(),
            ]);

        let value = serde_json::to_value(&topic).unwrap();
        assert_eq!(value["estimatedHours"], 3);
        assert_eq!(value["status"], "Now");
        assert_eq!(value["links"][0]["type"], "docs");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_validate_catches_deserialized_blank_fields() {
        let topic = Topic::new(TopicId::new("t1").unwrap(), "Grid", Utc::now()).unwrap();
        let mut value = serde_json::to_value(&topic).unwrap();
        value["title"] = serde_json::json!("");
        let blank: Topic = serde_json::from_value(value).unwrap();
        assert_eq!(blank.validate(), Err(ModelError::EmptyField { entity: "topic", field: "title" }));

        let mut linked = topic.with_links(vec![
            Link::new("MDN", "https://developer.mozilla.org", LinkCategory::Docs).unwrap(),
        ]);
        assert!(linked.validate().is_ok());
        linked.links[0].url.clear();
        assert_eq!(linked.validate(), Err(ModelError::EmptyField { entity: "link", field: "url" }));
    }

    #[test]
    fn test_links_omitted_when_empty() {
        let topic = Topic::new(TopicId::new("t1").unwrap(), "Grid", Utc::now()).unwrap();
        let value = serde_json::to_value(&topic).unwrap();
        assert!(value.get("links").is_none());

        let back: Topic = serde_json::from_value(value).unwrap();
        assert_eq!(back, topic);
    }
}
