//! Error types for fieldguard.
//!
//! Rule failures are not errors: they are [`Message`](crate::core::message::Message)
//! values recorded on fields. The types here cover contract violations while
//! building rules, bad configuration, and unreadable input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for fieldguard.
///
/// This enum encompasses all error categories and enables automatic
/// conversion between specific error types.
#[derive(Error, Debug)]
pub enum FieldguardError {
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Contract violations when constructing a rule.
///
/// These are programmer errors: a rule must always have a predicate, a
/// non-empty message and a severity.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleError {
    #[error("Rule has no predicate")]
    MissingPredicate,

    #[error("Rule has no message")]
    MissingMessage,

    #[error("Rule message is empty")]
    EmptyMessage,

    #[error("Rule '{message}' has no severity")]
    MissingSeverity { message: String },
}

/// Errors from configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Length unit cannot be empty")]
    EmptyLengthUnit,
}

// ============================================================================
// Error Utilities
// ============================================================================

impl RuleError {
    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            RuleError::MissingPredicate => Some("Call .predicate(...) before .build()".to_string()),
            RuleError::MissingMessage | RuleError::EmptyMessage => {
                Some("Call .message(...) with the text shown when the rule fails".to_string())
            }
            RuleError::MissingSeverity { .. } => {
                Some("Call .severity(...) before .build()".to_string())
            }
        }
    }
}

impl ConfigError {
    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            ConfigError::UnknownAction(_) => Some(format!(
                "Use one of: {}",
                crate::core::types::Action::all()
                    .iter()
                    .map(|action| action.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
            ConfigError::EmptyLengthUnit => Some("Set length_unit, e.g. \"characters\"".to_string()),
        }
    }
}

/// Result type alias for fieldguard operations.
pub type FieldguardResult<T> = Result<T, FieldguardError>;

/// Result type alias for rule construction.
pub type RuleResult<T> = Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_suggestions() {
        let error = RuleError::MissingSeverity {
            message: "Name is required".to_string(),
        };
        assert_eq!(error.to_string(), "Rule 'Name is required' has no severity");
        assert!(error.suggested_fix().unwrap().contains("severity"));
    }

    #[test]
    fn test_unknown_action_suggestion() {
        let error = ConfigError::UnknownAction("publish".to_string());
        let fix = error.suggested_fix().unwrap();
        assert!(fix.contains("create"));
        assert!(fix.contains("delete"));
    }

    #[test]
    fn test_error_conversion() {
        fn fails() -> FieldguardResult<()> {
            let result: Result<(), ConfigError> = Err(ConfigError::EmptyLengthUnit);
            result?;
            Ok(())
        }

        let error = fails().unwrap_err();
        assert!(matches!(
            error,
            FieldguardError::Config(ConfigError::EmptyLengthUnit)
        ));
        assert_eq!(
            error.to_string(),
            "Configuration error: Length unit cannot be empty"
        );
    }
}
