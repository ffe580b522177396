//! Traversal helpers for the module tree.
//!
//! All traversals are depth-first pre-order: a module comes before its
//! children, and a module's own topics come before any sub-module's topics.

use crate::id::{ModuleId, TopicId};
use crate::module::Module;
use crate::topic::Topic;

/// Pre-order walk over a module forest, yielding `(depth, module)`.
///
/// Top-level modules have depth 0.
pub fn walk(modules: &[Module]) -> Walk<'_> {
    Walk {
        stack: modules.iter().rev().map(|m| (0, m)).collect(),
    }
}

/// Iterator returned by [`walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Module)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Module);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, module) = self.stack.pop()?;
        self.stack
            .extend(module.sub_modules.iter().rev().map(|m| (depth + 1, m)));
        Some((depth, module))
    }
}

/// Every topic in the forest, own topics before sub-module topics.
pub fn flatten_topics(modules: &[Module]) -> Vec<&Topic> {
    walk(modules).flat_map(|(_, m)| m.topics.iter()).collect()
}

/// Every module in the forest, parents before children.
pub fn flatten_modules(modules: &[Module]) -> Vec<&Module> {
    walk(modules).map(|(_, m)| m).collect()
}

/// First module with the given id in traversal order.
pub fn find_module<'a>(modules: &'a [Module], id: &ModuleId) -> Option<&'a Module> {
    walk(modules).map(|(_, m)| m).find(|m| &m.id == id)
}

/// First topic with the given id in traversal order.
pub fn find_topic<'a>(modules: &'a [Module], id: &TopicId) -> Option<&'a Topic> {
    walk(modules)
        .flat_map(|(_, m)| m.topics.iter())
        .find(|t| &t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn topic(id: &str) -> Topic {
        Topic::new(TopicId::new(id).unwrap(), id, Utc::now()).unwrap()
    }

    fn module(id: &str, topics: &[&str], children: Vec<Module>) -> Module {
        Module::new(ModuleId::new(id).unwrap(), id, Utc::now())
            .unwrap()
            .with_topics(topics.iter().map(|t| topic(t)).collect())
            .with_sub_modules(children)
    }

    fn ids(topics: &[&Topic]) -> Vec<String> {
        topics.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_flatten_own_topics_first() {
        let tree = vec![module("m", &["a", "b"], vec![module("sub", &["c", "d", "e"], vec![])])];

        let topics = flatten_topics(&tree);
        assert_eq!(topics.len(), 5);
        assert_eq!(ids(&topics), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_flatten_preserves_child_order() {
        let tree = vec![
            module("js", &[], vec![
                module("core", &["c1"], vec![module("deep", &["d1"], vec![])]),
                module("async", &["a1"], vec![]),
            ]),
            module("react", &["r1"], vec![]),
        ];

        assert_eq!(ids(&flatten_topics(&tree)), vec!["c1", "d1", "a1", "r1"]);

        let order: Vec<(usize, String)> = walk(&tree).map(|(d, m)| (d, m.id.to_string())).collect();
        assert_eq!(
            order,
            vec![
                (0, "js".to_string()),
                (1, "core".to_string()),
                (2, "deep".to_string()),
                (1, "async".to_string()),
                (0, "react".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_empty_forest() {
        assert!(flatten_topics(&[]).is_empty());
        assert!(flatten_modules(&[]).is_empty());
    }

    #[test]
    fn test_find_module_nested_three_levels() {
        let tree = vec![
            module("top", &[], vec![module("mid", &[], vec![module("leaf", &["x"], vec![])])]),
            module("other", &[], vec![]),
        ];

        let found = find_module(&tree, &ModuleId::new("leaf").unwrap()).unwrap();
        assert_eq!(found.id.as_str(), "leaf");
        assert_eq!(found.topics.len(), 1);
    }

    #[test]
    fn test_find_module_not_found() {
        let tree = vec![module("top", &["a"], vec![module("mid", &[], vec![])])];
        assert!(find_module(&tree, &ModuleId::new("missing").unwrap()).is_none());
    }

    #[test]
    fn test_find_topic_in_sub_module() {
        let tree = vec![module("top", &["a"], vec![module("mid", &["b"], vec![])])];
        assert_eq!(find_topic(&tree, &TopicId::new("b").unwrap()).unwrap().id.as_str(), "b");
        assert!(find_topic(&tree, &TopicId::new("z").unwrap()).is_none());
    }
}
