//! Factory for the built-in rules.

use crate::core::config::RuleConfig;
use crate::core::types::{ActionSet, Severity};
use crate::rules::value::{Numeric, Presence, TextLength};
use crate::validation::rule::Rule;

/// Produces built-in rules with shared defaults.
///
/// Every rule created by a factory is skipped for the factory's skip set,
/// and length rules use its unit word in their messages. The defaults are
/// `{Get, List, Delete}` and `"characters"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFactory {
    skip_actions: ActionSet,
    length_unit: String,
}

impl RuleFactory {
    /// Create a factory with the default settings.
    pub fn new() -> Self {
        Self::from_config(&RuleConfig::default())
    }

    /// Create a factory from loaded configuration.
    pub fn from_config(config: &RuleConfig) -> Self {
        Self {
            skip_actions: config.skip_actions.clone(),
            length_unit: config.length_unit.clone(),
        }
    }

    /// Set the skip set for rules created afterwards.
    pub fn with_skip_actions(mut self, actions: impl Into<ActionSet>) -> Self {
        self.skip_actions = actions.into();
        self
    }

    /// Set the unit word used by length rules.
    pub fn with_length_unit(mut self, unit: impl Into<String>) -> Self {
        self.length_unit = unit.into();
        self
    }

    /// Skip set applied to created rules.
    pub fn skip_actions(&self) -> &ActionSet {
        &self.skip_actions
    }

    /// Unit word used by length rules.
    pub fn length_unit(&self) -> &str {
        &self.length_unit
    }

    // ========================================================================
    // Built-in rules
    // ========================================================================

    /// Value must be supplied. Strings must contain a non-whitespace character.
    ///
    /// Message: `"{label} is required"` (warning).
    pub fn required<M, T>(&self, label: &str) -> Rule<M, T>
    where
        M: 'static,
        T: Presence + 'static,
    {
        self.build(
            |_, value: &T| value.is_present(),
            format!("{} is required", label),
        )
    }

    /// Number must be at least `min`.
    ///
    /// Message: `"{label} can't be lower than {min}"` (warning).
    pub fn min<M, T>(&self, min: f64, label: &str) -> Rule<M, T>
    where
        M: 'static,
        T: Numeric + 'static,
    {
        self.build(
            move |_, value: &T| value.as_f64().map_or(true, |number| number >= min),
            format!("{} can't be lower than {}", label, min),
        )
    }

    /// Number must be at most `max`.
    ///
    /// Message: `"{label} can't be higher than {max}"` (warning).
    pub fn max<M, T>(&self, max: f64, label: &str) -> Rule<M, T>
    where
        M: 'static,
        T: Numeric + 'static,
    {
        self.build(
            move |_, value: &T| value.as_f64().map_or(true, |number| number <= max),
            format!("{} can't be higher than {}", label, max),
        )
    }

    /// Length must be at least `min`, measured in the factory's unit.
    pub fn min_length<M, T>(&self, min: usize, label: &str) -> Rule<M, T>
    where
        M: 'static,
        T: TextLength + 'static,
    {
        self.min_length_in(min, label, &self.length_unit)
    }

    /// Length must be at least `min`.
    ///
    /// Message: `"{label} can't have less than {min} {unit}"` (warning).
    pub fn min_length_in<M, T>(&self, min: usize, label: &str, unit: &str) -> Rule<M, T>
    where
        M: 'static,
        T: TextLength + 'static,
    {
        self.build(
            move |_, value: &T| value.text_length().map_or(true, |len| len >= min),
            format!("{} can't have less than {} {}", label, min, unit),
        )
    }

    /// Length must be at most `max`, measured in the factory's unit.
    pub fn max_length<M, T>(&self, max: usize, label: &str) -> Rule<M, T>
    where
        M: 'static,
        T: TextLength + 'static,
    {
        self.max_length_in(max, label, &self.length_unit)
    }

    /// Length must be at most `max`.
    ///
    /// Message: `"{label} can't have more than {max} {unit}"` (warning).
    pub fn max_length_in<M, T>(&self, max: usize, label: &str, unit: &str) -> Rule<M, T>
    where
        M: 'static,
        T: TextLength + 'static,
    {
        self.build(
            move |_, value: &T| value.text_length().map_or(true, |len| len <= max),
            format!("{} can't have more than {} {}", label, max, unit),
        )
    }

    /// Value must differ from another value on the same model.
    ///
    /// `other` selects the value to compare against. The message text is
    /// used as given (warning).
    pub fn not_equal_to<M, T, F>(&self, other: F, text: impl Into<String>) -> Rule<M, T>
    where
        M: 'static,
        T: PartialEq + 'static,
        F: Fn(&M) -> &T + Send + Sync + 'static,
    {
        self.build(move |model: &M, value: &T| value != other(model), text.into())
    }

    fn build<M, T, F>(&self, predicate: F, text: String) -> Rule<M, T>
    where
        F: Fn(&M, &T) -> bool + Send + Sync + 'static,
    {
        Rule::new(predicate, text, Severity::Warning).skipping(self.skip_actions.clone())
    }
}

impl Default for RuleFactory {
    fn default() -> Self {
        Self::new()
    }
}
