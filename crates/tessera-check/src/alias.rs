//! Detects components created through an alias instead of their canonical
//! type name

use crate::check::SceneCheck;
use crate::event::CreationEvent;
use std::collections::BTreeMap;

pub const NAME: &str = "SceneCheckUsingAlias";

const DESCRIPTION: &str = "Check if a component has been created using an alias.";

const HEADER: &str =
    "This scene is using hard coded aliases. Aliases can be very confusing, use with caution.";

/// How many objects of one type were created with one alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasUsage {
    pub type_name: String,
    pub alias: String,
    pub count: usize,
}

/// Records every object whose declared type differs from its canonical
/// type, and reports them grouped by type and alias.
#[derive(Debug, Default)]
pub struct AliasUsageCheck {
    /// canonical type name -> aliases used for it, one entry per object
    created_using_alias: BTreeMap<String, Vec<String>>,
}

impl AliasUsageCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.created_using_alias.is_empty()
    }

    /// Raw aliases recorded for a canonical type, duplicates included
    pub fn observed(&self, type_name: &str) -> &[String] {
        self.created_using_alias
            .get(type_name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct (type, alias) pairs with their counts.
    ///
    /// Types come in ascending order; within a type, aliases are sorted
    /// lexicographically. Counts never affect the order.
    pub fn usages(&self) -> Vec<AliasUsage> {
        let mut usages = Vec::new();

        for (type_name, aliases) in &self.created_using_alias {
            let mut unique = aliases.clone();
            unique.sort();
            unique.dedup();

            for alias in unique {
                let count = aliases.iter().filter(|a| **a == alias).count();
                usages.push(AliasUsage {
                    type_name: type_name.clone(),
                    alias,
                    count,
                });
            }
        }

        usages
    }
}

impl SceneCheck for AliasUsageCheck {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn on_object_created(&mut self, event: &CreationEvent<'_>) {
        if event.uses_alias() {
            self.created_using_alias
                .entry(event.canonical_type_name().to_string())
                .or_default()
                .push(event.declared_type_name().to_string());
        }
    }

    fn summary(&self) -> Option<String> {
        if self.created_using_alias.is_empty() {
            return None;
        }

        let mut lines = vec![HEADER.to_string()];
        for usage in self.usages() {
            lines.push(format!(
                "  - {}: {} created with alias \"{}\"",
                usage.type_name, usage.count, usage.alias
            ));
        }

        Some(lines.join("\n"))
    }

    fn reset(&mut self) {
        self.created_using_alias.clear();
    }
}
