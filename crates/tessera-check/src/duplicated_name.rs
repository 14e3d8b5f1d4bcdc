//! Detects objects sharing a name within the same node

use crate::check::SceneCheck;
use crate::event::CreationEvent;
use std::collections::BTreeMap;

pub const NAME: &str = "SceneCheckDuplicatedName";

const DESCRIPTION: &str = "Check if a node contains several objects with the same name.";

const HEADER: &str =
    "Several objects share the same name within a node. Names should be unique to be addressable.";

/// A name used more than once in one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatedName {
    pub node: String,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct DuplicatedNameCheck {
    /// node path -> object name -> number of objects using it
    names: BTreeMap<String, BTreeMap<String, usize>>,
}

impl DuplicatedNameCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names seen more than once, ordered by node then name
    pub fn duplicates(&self) -> Vec<DuplicatedName> {
        self.names
            .iter()
            .flat_map(|(node, names)| {
                names
                    .iter()
                    .filter(|(_, count)| **count > 1)
                    .map(move |(name, count)| DuplicatedName {
                        node: node.clone(),
                        name: name.clone(),
                        count: *count,
                    })
            })
            .collect()
    }
}

impl SceneCheck for DuplicatedNameCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn on_object_created(&mut self, event: &CreationEvent<'_>) {
        let object = event.object();
        // Unnamed objects cannot collide
        if object.name().is_empty() {
            return;
        }

        *self
            .names
            .entry(object.node().to_string())
            .or_default()
            .entry(object.name().to_string())
            .or_insert(0) += 1;
    }

    fn summary(&self) -> Option<String> {
        let duplicates = self.duplicates();
        if duplicates.is_empty() {
            return None;
        }

        let mut lines = vec![HEADER.to_string()];
        for dup in duplicates {
            lines.push(format!(
                "  - {}: \"{}\" used {} times",
                dup.node, dup.name, dup.count
            ));
        }

        Some(lines.join("\n"))
    }

    fn reset(&mut self) {
        self.names.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::test_support::{create_named, sample_factory};

    fn observe(check: &mut DuplicatedNameCheck, objects: &[(&str, &str)]) {
        let factory = sample_factory();
        for (name, node) in objects {
            let (obj, desc) = create_named(&factory, "Box", name, node);
            check.on_object_created(&CreationEvent::new(&obj, &desc));
        }
    }

    #[test]
    fn test_unique_names_report_nothing() {
        let mut check = DuplicatedNameCheck::new();
        observe(&mut check, &[("a", "/"), ("b", "/"), ("a", "/child")]);

        assert!(!check.is_empty());
        assert!(check.duplicates().is_empty());
        assert_eq!(check.summary(), None);
    }

    #[test]
    fn test_duplicates_grouped_by_node() {
        let mut check = DuplicatedNameCheck::new();
        observe(
            &mut check,
            &[
                ("wall", "/room"),
                ("wall", "/room"),
                ("wall", "/room"),
                ("dofs", "/"),
                ("dofs", "/"),
                ("wall", "/"),
            ],
        );

        let sink = MemorySink::new();
        check.print_summary_and_reset(&sink);

        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].source, "SceneCheckDuplicatedName");
        let lines: Vec<&str> = diagnostics[0].message.lines().skip(1).collect();
        assert_eq!(
            lines,
            vec!["  - /: \"dofs\" used 2 times", "  - /room: \"wall\" used 3 times"]
        );
        assert!(check.is_empty());
    }

    #[test]
    fn test_unnamed_objects_ignored() {
        let mut check = DuplicatedNameCheck::new();
        observe(&mut check, &[("", "/"), ("", "/")]);
        assert!(check.is_empty());
    }

    #[test]
    fn test_reset_clears_non_reported_state() {
        let mut check = DuplicatedNameCheck::new();
        observe(&mut check, &[("a", "/")]);

        let sink = MemorySink::new();
        check.print_summary_and_reset(&sink);
        assert!(sink.is_empty());
        assert!(check.is_empty());

        // A name seen once per load must not add up across loads
        observe(&mut check, &[("a", "/")]);
        assert_eq!(check.summary(), None);
    }
}
