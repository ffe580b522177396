//! Topic and module filtering.

use learnpath_core::{tree, Module, StatusOverrides, Topic, TopicStatus};

use crate::engine::effective_status;

/// Filter for topic queries.
#[derive(Debug, Clone, Default)]
pub struct TopicFilter {
    /// Filter by effective status
    pub status: Option<Vec<TopicStatus>>,

    /// Case-insensitive text matched against title, description and keywords
    pub query: Option<String>,
}

impl TopicFilter {
    /// Filter on a single status.
    pub fn status(status: TopicStatus) -> Self {
        Self {
            status: Some(vec![status]),
            query: None,
        }
    }

    /// Add a text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Whether a topic passes the filter.
    pub fn matches(&self, topic: &Topic, overrides: &StatusOverrides) -> bool {
        if let Some(statuses) = &self.status {
            if !statuses.contains(&effective_status(topic, overrides)) {
                return false;
            }
        }

        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                topic.title.to_lowercase().contains(&query)
                    || topic.description.to_lowercase().contains(&query)
                    || topic.keywords.iter().any(|k| k.to_lowercase().contains(&query))
            }
        }
    }

    /// Keep the topics that pass, in input order.
    pub fn apply<'a, I>(&self, topics: I, overrides: &StatusOverrides) -> Vec<&'a Topic>
    where
        I: IntoIterator<Item = &'a Topic>,
    {
        topics
            .into_iter()
            .filter(|topic| self.matches(topic, overrides))
            .collect()
    }
}

/// Modules whose title, description or summary contains `query`,
/// case-insensitively, in pre-order. An empty query returns every module.
pub fn search_modules<'a>(modules: &'a [Module], query: &str) -> Vec<&'a Module> {
    let query = query.trim().to_lowercase();
    tree::flatten_modules(modules)
        .into_iter()
        .filter(|m| {
            query.is_empty()
                || m.title.to_lowercase().contains(&query)
                || m.description.to_lowercase().contains(&query)
                || m.summary.to_lowercase().contains(&query)
        })
        .collect()
}
