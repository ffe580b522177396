//! Module model - a node in the curriculum tree.

use serde::{Deserialize, Serialize};

use crate::error::{require, Result};
use crate::id::ModuleId;
use crate::topic::{Link, Topic};
use crate::tree;
use crate::Time;

/// A module groups topics and may own nested sub-modules.
///
/// Each module owns its children outright, so the tree can never contain a
/// cycle or a shared node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique identifier
    pub id: ModuleId,

    /// Module title
    pub title: String,

    /// Short description
    pub description: String,

    /// Longer summary
    pub summary: String,

    /// When created
    pub created_at: Time,

    /// Topics owned directly by this module
    pub topics: Vec<Topic>,

    /// Child modules, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_modules: Vec<Module>,

    /// Aggregate effort override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,

    /// Reference material
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Module {
    /// Create an empty module.
    pub fn new(id: ModuleId, title: impl Into<String>, created_at: Time) -> Result<Self> {
        let title = title.into();
        require("module", "title", &title)?;

        Ok(Self {
            id,
            title,
            description: String::new(),
            summary: String::new(),
            created_at,
            topics: Vec::new(),
            sub_modules: Vec::new(),
            estimated_hours: None,
            links: Vec::new(),
        })
    }

    /// Set description and summary.
    pub fn with_text(mut self, description: impl Into<String>, summary: impl Into<String>) -> Self {
        self.description = description.into();
        self.summary = summary.into();
        self
    }

    /// Set the directly owned topics.
    pub fn with_topics(mut self, topics: Vec<Topic>) -> Self {
        self.topics = topics;
        self
    }

    /// Set the child modules.
    pub fn with_sub_modules(mut self, sub_modules: Vec<Module>) -> Self {
        self.sub_modules = sub_modules;
        self
    }

    /// Override the aggregate effort estimate.
    pub fn with_estimated_hours(mut self, hours: u32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Set the reference links.
    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    /// Own topics followed by every descendant's topics, pre-order.
    pub fn all_topics(&self) -> Vec<&Topic> {
        tree::flatten_topics(std::slice::from_ref(self))
    }

    /// Effort for the whole subtree: the override if set, otherwise the sum
    /// over the effective topic set.
    pub fn total_hours(&self) -> u32 {
        self.estimated_hours
            .unwrap_or_else(|| self.all_topics().iter().map(|t| t.estimated_hours).sum())
    }

    /// Check this module's own fields. Children and topics are checked by
    /// [`crate::Roadmap::validate`] as it walks the tree.
    pub fn validate(&self) -> Result<()> {
        require("module", "title", &self.title)?;
        self.links.iter().try_for_each(Link::validate)
    }

    /// Whether this module has child modules.
    pub fn has_sub_modules(&self) -> bool {
        !self.sub_modules.is_empty()
    }
}
