// File: src/rules.rs
// Purpose: Length bounds used by the field validators

use serde::{Deserialize, Serialize};

/// Length bounds applied by [`crate::validate_field_with`]
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Minimum trimmed name length (default: 2)
    #[serde(default = "default_name_min_length")]
    pub name_min_length: usize,

    /// Minimum trimmed message length (default: 10)
    #[serde(default = "default_message_min_length")]
    pub message_min_length: usize,

    /// Maximum raw message length (default: 1000)
    #[serde(default = "default_message_max_length")]
    pub message_max_length: usize,
}

fn default_name_min_length() -> usize {
    2
}

fn default_message_min_length() -> usize {
    10
}

fn default_message_max_length() -> usize {
    1000
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min_length: default_name_min_length(),
            message_min_length: default_message_min_length(),
            message_max_length: default_message_max_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = ValidationRules::default();
        assert_eq!(rules.name_min_length, 2);
        assert_eq!(rules.message_min_length, 10);
        assert_eq!(rules.message_max_length, 1000);
    }

    #[test]
    fn test_partial_rules_fill_defaults() {
        let rules: ValidationRules = toml::from_str("message_max_length = 500").unwrap();
        assert_eq!(rules.message_max_length, 500);
        assert_eq!(rules.name_min_length, 2);
        assert_eq!(rules.message_min_length, 10);
    }
}
