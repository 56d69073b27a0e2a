//! Rules: a predicate, a message template and the actions it is skipped for.

use crate::core::error::{RuleError, RuleResult};
use crate::core::message::Message;
use crate::core::types::{Action, ActionSet, Severity};
use std::fmt;
use std::sync::Arc;

/// Predicate over the owning model and the field value.
///
/// The model is passed so rules can compare against other fields.
pub type Predicate<M, T> = Arc<dyn Fn(&M, &T) -> bool + Send + Sync>;

/// A single validation rule for values of type `T` on models of type `M`.
///
/// Rules are immutable once built and cheap to clone; the predicate is shared,
/// so one rule can be attached to many fields.
pub struct Rule<M, T> {
    predicate: Predicate<M, T>,
    message: Message,
    skip_actions: ActionSet,
}

impl<M, T> Rule<M, T> {
    /// Create a rule that is skipped for `Get`, `List` and `Delete`.
    pub fn new<F>(predicate: F, text: impl Into<String>, severity: Severity) -> Self
    where
        F: Fn(&M, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: Message::new(text, severity),
            skip_actions: ActionSet::read_only(),
        }
    }

    /// Start building a rule whose arguments are checked on `build()`.
    pub fn builder() -> RuleBuilder<M, T> {
        RuleBuilder::new()
    }

    /// Replace the set of actions this rule is skipped for.
    pub fn skipping(mut self, actions: impl Into<ActionSet>) -> Self {
        self.skip_actions = actions.into();
        self
    }

    /// Run this rule for every action.
    pub fn always(mut self) -> Self {
        self.skip_actions = ActionSet::new();
        self
    }

    /// Message appended to a field when the rule fails.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Severity of the message.
    pub fn severity(&self) -> Severity {
        self.message.severity()
    }

    /// Actions this rule is skipped for.
    pub fn skip_actions(&self) -> &ActionSet {
        &self.skip_actions
    }

    /// Whether the rule does not apply to `action`.
    pub fn skips(&self, action: Action) -> bool {
        self.skip_actions.contains(action)
    }

    /// Evaluate the rule.
    ///
    /// Returns `true` without calling the predicate when `action` is skipped.
    pub fn evaluate(&self, model: &M, value: &T, action: Action) -> bool {
        if self.skips(action) {
            log::trace!("Skipping rule '{}' for {}", self.message.text(), action);
            return true;
        }

        (self.predicate)(model, value)
    }
}

impl<M, T> Clone for Rule<M, T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            message: self.message.clone(),
            skip_actions: self.skip_actions.clone(),
        }
    }
}

impl<M, T> fmt::Debug for Rule<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .field("skip_actions", &self.skip_actions)
            .field("predicate", &"<closure>")
            .finish()
    }
}

// ============================================================================
// Rule Builder
// ============================================================================

/// Builder for [`Rule`] that rejects incomplete rules.
pub struct RuleBuilder<M, T> {
    predicate: Option<Predicate<M, T>>,
    text: Option<String>,
    severity: Option<Severity>,
    skip_actions: ActionSet,
}

impl<M, T> RuleBuilder<M, T> {
    /// Create an empty builder. The skip set starts as `Get`, `List`, `Delete`.
    pub fn new() -> Self {
        Self {
            predicate: None,
            text: None,
            severity: None,
            skip_actions: ActionSet::read_only(),
        }
    }

    /// Set the predicate.
    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&M, &T) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Set the message text.
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the message severity.
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Replace the skip set.
    pub fn skipping(mut self, actions: impl Into<ActionSet>) -> Self {
        self.skip_actions = actions.into();
        self
    }

    /// Build the rule.
    pub fn build(self) -> RuleResult<Rule<M, T>> {
        let predicate = self.predicate.ok_or(RuleError::MissingPredicate)?;
        let text = self.text.ok_or(RuleError::MissingMessage)?;
        if text.trim().is_empty() {
            return Err(RuleError::EmptyMessage);
        }
        let severity = self
            .severity
            .ok_or_else(|| RuleError::MissingSeverity { message: text.clone() })?;

        Ok(Rule {
            predicate,
            message: Message::new(text, severity),
            skip_actions: self.skip_actions,
        })
    }
}

impl<M, T> Default for RuleBuilder<M, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn positive() -> Rule<(), i64> {
        Rule::new(|_, value: &i64| *value > 0, "Count must be positive", Severity::Error)
    }

    #[test]
    fn test_evaluate_runs_predicate() {
        let rule = positive();
        assert!(rule.evaluate(&(), &3, Action::Create));
        assert!(!rule.evaluate(&(), &-1, Action::Update));
    }

    #[test]
    fn test_default_skip_set() {
        let rule = positive();
        assert_eq!(rule.skip_actions(), &ActionSet::read_only());
        for action in [Action::Get, Action::List, Action::Delete] {
            assert!(rule.evaluate(&(), &-1, action));
        }
    }

    #[test]
    fn test_skipped_rule_does_not_call_predicate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rule: Rule<(), i64> = Rule::new(
            move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                false
            },
            "Never holds",
            Severity::Warning,
        );

        assert!(rule.evaluate(&(), &0, Action::Get));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(!rule.evaluate(&(), &0, Action::Create));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_skipping_override() {
        let rule = positive().skipping([Action::Create]);
        assert!(rule.evaluate(&(), &-1, Action::Create));
        assert!(!rule.evaluate(&(), &-1, Action::Get));

        let rule = positive().always();
        assert!(Action::all().iter().all(|&a| !rule.evaluate(&(), &-1, a)));
    }

    #[test]
    fn test_cross_value_predicate() {
        struct Range {
            low: i64,
        }
        let rule: Rule<Range, i64> = Rule::new(
            |model: &Range, value: &i64| *value > model.low,
            "High must exceed low",
            Severity::Warning,
        );
        assert!(rule.evaluate(&Range { low: 1 }, &2, Action::Update));
        assert!(!rule.evaluate(&Range { low: 5 }, &2, Action::Update));
    }

    #[test]
    fn test_builder() {
        let rule: Rule<(), String> = Rule::builder()
            .predicate(|_, value: &String| value.contains('@'))
            .message("Email must contain @")
            .severity(Severity::Error)
            .skipping([Action::Delete])
            .build()
            .unwrap();

        assert_eq!(rule.severity(), Severity::Error);
        assert_eq!(rule.message().text(), "Email must contain @");
        assert!(rule.skips(Action::Delete));
        assert!(!rule.skips(Action::Get));
    }

    #[test]
    fn test_builder_rejects_incomplete_rules() {
        let missing_predicate = RuleBuilder::<(), i64>::new()
            .message("x")
            .severity(Severity::Info)
            .build();
        assert_eq!(missing_predicate.unwrap_err(), RuleError::MissingPredicate);

        let missing_message = RuleBuilder::<(), i64>::new()
            .predicate(|_, _| true)
            .severity(Severity::Info)
            .build();
        assert_eq!(missing_message.unwrap_err(), RuleError::MissingMessage);

        let empty_message = RuleBuilder::<(), i64>::new()
            .predicate(|_, _| true)
            .message("   ")
            .severity(Severity::Info)
            .build();
        assert_eq!(empty_message.unwrap_err(), RuleError::EmptyMessage);

        let missing_severity = RuleBuilder::<(), i64>::new()
            .predicate(|_, _| true)
            .message("Needs a level")
            .build();
        assert_eq!(
            missing_severity.unwrap_err(),
            RuleError::MissingSeverity {
                message: "Needs a level".to_string()
            }
        );
    }

    #[test]
    fn test_clone_shares_predicate() {
        let rule = positive();
        let copy = rule.clone();
        assert!(Arc::ptr_eq(&rule.predicate, &copy.predicate));
        assert_eq!(copy.message(), rule.message());
    }
}
