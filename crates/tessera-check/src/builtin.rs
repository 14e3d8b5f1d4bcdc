//! Catalog of the checks shipped with Tessera

use crate::alias::{self, AliasUsageCheck};
use crate::check::SceneCheck;
use crate::duplicated_name::{self, DuplicatedNameCheck};

/// Names of the built-in checks, in the order they are registered
pub const BUILTIN_CHECKS: &[&str] = &[alias::NAME, duplicated_name::NAME];

/// Instantiate a built-in check by name
pub fn builtin_check(name: &str) -> Option<Box<dyn SceneCheck>> {
    match name {
        alias::NAME => Some(Box::new(AliasUsageCheck::new())),
        duplicated_name::NAME => Some(Box::new(DuplicatedNameCheck::new())),
        _ => None,
    }
}

/// Instantiate every built-in check, in catalog order
pub fn builtin_checks() -> Vec<Box<dyn SceneCheck>> {
    BUILTIN_CHECKS
        .iter()
        .filter_map(|name| builtin_check(name))
        .collect()
}

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_CHECKS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_match_instances() {
        let checks = builtin_checks();
        assert_eq!(checks.len(), BUILTIN_CHECKS.len());
        for (check, name) in checks.iter().zip(BUILTIN_CHECKS) {
            assert_eq!(check.name(), *name);
            assert!(!check.description().is_empty());
        }
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(builtin_check("SceneCheckMissing").is_none());
        assert!(!is_builtin("SceneCheckMissing"));
        assert!(is_builtin("SceneCheckUsingAlias"));
    }
}
