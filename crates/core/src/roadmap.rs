//! Roadmap model - the whole curriculum.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{require, ModelError, Result};
use crate::id::{ModuleId, RoadmapId, TopicId};
use crate::module::Module;
use crate::topic::Topic;
use crate::tree;
use crate::Time;

/// A roadmap owns the entire module tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Unique identifier
    pub id: RoadmapId,

    /// Roadmap title
    pub title: String,

    /// Description
    pub description: String,

    /// Semantic version of the curriculum
    pub version: String,

    /// Top-level modules, in display order
    pub modules: Vec<Module>,

    /// When created
    pub created_at: Time,

    /// Last updated
    pub updated_at: Time,
}

impl Roadmap {
    /// Create an empty roadmap.
    pub fn new(
        id: RoadmapId,
        title: impl Into<String>,
        version: impl Into<String>,
        created_at: Time,
    ) -> Result<Self> {
        let roadmap = Self {
            id,
            title: title.into(),
            description: String::new(),
            version: version.into(),
            modules: Vec::new(),
            created_at,
            updated_at: created_at,
        };
        roadmap.check_fields()?;
        Ok(roadmap)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the top-level modules.
    pub fn with_modules(mut self, modules: Vec<Module>) -> Self {
        self.modules = modules;
        self
    }

    /// Set the last-updated timestamp.
    pub fn with_updated_at(mut self, updated_at: Time) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Every topic in the roadmap, pre-order.
    pub fn all_topics(&self) -> Vec<&Topic> {
        tree::flatten_topics(&self.modules)
    }

    /// Every module in the roadmap, pre-order.
    pub fn all_modules(&self) -> Vec<&Module> {
        tree::flatten_modules(&self.modules)
    }

    /// Find a module anywhere in the tree.
    pub fn find_module(&self, id: &ModuleId) -> Option<&Module> {
        tree::find_module(&self.modules, id)
    }

    /// Find a topic anywhere in the tree.
    pub fn find_topic(&self, id: &TopicId) -> Option<&Topic> {
        tree::find_topic(&self.modules, id)
    }

    fn check_fields(&self) -> Result<()> {
        require("roadmap", "title", &self.title)?;
        if !is_semver(&self.version) {
            return Err(ModelError::InvalidValue {
                kind: "roadmap version",
                value: self.version.clone(),
            });
        }
        Ok(())
    }

    /// Check the roadmap's own fields, every module's and topic's field
    /// rules, and that every identifier is unique across the whole tree.
    /// Modules and topics share one namespace.
    pub fn validate(&self) -> Result<()> {
        self.check_fields()?;
        let mut seen: HashSet<&str> = HashSet::new();
        for (_, module) in tree::walk(&self.modules) {
            module.validate()?;
            if !seen.insert(module.id.as_str()) {
                return Err(ModelError::DuplicateId(module.id.to_string()));
            }
            for topic in &module.topics {
                topic.validate()?;
                if !seen.insert(topic.id.as_str()) {
                    return Err(ModelError::DuplicateId(topic.id.to_string()));
                }
            }
        }
        Ok(())
    }
}

/// `MAJOR.MINOR.PATCH`, each a decimal number.
fn is_semver(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}
