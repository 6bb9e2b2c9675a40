use std::path::PathBuf;

use crate::restyle::ReplacementRule;

/// Legacy input styling being replaced.
pub const OLD_CLASSES: &str = "shadow appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline";

/// Input styling with visible focus ring.
pub const NEW_CLASSES: &str = "shadow-sm appearance-none border border-gray-300 rounded-lg w-full py-3 px-4 text-gray-700 leading-tight focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition-all";

/// Files to update, relative to the working directory. Processed in order.
pub const TARGET_FILES: &[&str] = &[
    "src/Components/Lessee/LesseeForm.tsx",
    "src/Components/Owner/OwnerForm.tsx",
];

/// Rule and targets for a run.
#[derive(Debug, Clone)]
pub struct RestyleConfig {
    pub rule: ReplacementRule,
    pub targets: Vec<PathBuf>,
}

impl Default for RestyleConfig {
    fn default() -> Self {
        Self {
            rule: ReplacementRule::from_static(OLD_CLASSES, NEW_CLASSES),
            targets: TARGET_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_passes_validation() {
        let config = RestyleConfig::default();
        let validated = ReplacementRule::new(config.rule.old(), config.rule.new_text());
        assert!(validated.is_ok());
    }

    #[test]
    fn default_targets_keep_declared_order() {
        let config = RestyleConfig::default();
        assert_eq!(
            config.targets,
            vec![
                PathBuf::from("src/Components/Lessee/LesseeForm.tsx"),
                PathBuf::from("src/Components/Owner/OwnerForm.tsx"),
            ]
        );
    }

    #[test]
    fn new_classes_do_not_contain_old_classes() {
        // A second run must find nothing to replace.
        assert!(!NEW_CLASSES.contains(OLD_CLASSES));
    }
}
