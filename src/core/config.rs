//! Rule defaults loaded from TOML.
//!
//! ```toml
//! skip_actions = ["get", "list", "delete"]
//! length_unit = "characters"
//! ```

use crate::core::error::{ConfigError, FieldguardResult};
use crate::core::types::{Action, ActionSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied by [`RuleFactory`](crate::rules::factory::RuleFactory)
/// to every built-in rule it creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Actions for which built-in rules are skipped
    pub skip_actions: ActionSet,
    /// Unit word used by length rule messages
    pub length_unit: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            skip_actions: ActionSet::read_only(),
            length_unit: "characters".to_string(),
        }
    }
}

/// TOML shape of [`RuleConfig`], with action tags left unparsed so that a bad
/// tag surfaces as [`ConfigError::UnknownAction`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRuleConfig {
    skip_actions: Option<Vec<String>>,
    length_unit: Option<String>,
}

impl RuleConfig {
    /// Parse a config from a TOML string. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> FieldguardResult<Self> {
        let raw: RawRuleConfig = toml::from_str(contents)?;

        let mut config = Self::default();
        if let Some(tags) = raw.skip_actions {
            config.skip_actions = tags
                .iter()
                .map(|tag| tag.parse::<Action>())
                .collect::<Result<ActionSet, ConfigError>>()?;
        }
        if let Some(unit) = raw.length_unit {
            config.length_unit = unit;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FieldguardResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded rule config from {}", path.as_ref().display());
        Self::from_toml_str(&contents)
    }

    /// Check config values that TOML cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length_unit.trim().is_empty() {
            return Err(ConfigError::EmptyLengthUnit);
        }
        Ok(())
    }
}
