//! Fields: a typed value, its ordered rules, and the outcome of the last run.

use crate::core::message::Message;
use crate::core::types::{Action, Severity};
use crate::validation::rule::Rule;
use std::fmt;

/// Result of evaluating a field's rules, before it is stored on the field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldOutcome {
    /// Messages of the failing rules, in rule declaration order.
    pub messages: Vec<Message>,
    /// Highest-ranked severity among `messages`.
    pub severity: Severity,
}

impl FieldOutcome {
    /// Build an outcome from failure messages, resolving the severity.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let severity = Severity::highest(messages.iter().map(Message::severity));
        Self { messages, severity }
    }

    /// Whether the outcome is acceptable.
    pub fn is_valid(&self) -> bool {
        !self.severity.is_failure()
    }
}

/// A named value slot on a model of type `M`.
///
/// The field owns its rules and the messages produced by the most recent
/// validation. Its severity is always the highest-ranked severity among those
/// messages.
pub struct Field<M, T> {
    name: String,
    value: T,
    rules: Vec<Rule<M, T>>,
    messages: Vec<Message>,
    severity: Severity,
}

impl<M, T> Field<M, T> {
    /// Create a field with no rules.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
            rules: Vec::new(),
            messages: Vec::new(),
            severity: Severity::None,
        }
    }

    /// Replace the rule list.
    pub fn with_rules(mut self, rules: Vec<Rule<M, T>>) -> Self {
        self.rules = rules;
        self
    }

    /// Append a rule.
    pub fn with_rule(mut self, rule: Rule<M, T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the value. Does not re-run validation.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the value. Does not re-run validation.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Consume the field and return its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule<M, T>] {
        &self.rules
    }

    /// Severity resolved from the current messages.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Alias for [`severity`](Field::severity).
    pub fn state(&self) -> Severity {
        self.severity
    }

    /// Whether the field is acceptable (not `Warning` or `Error`).
    pub fn is_valid(&self) -> bool {
        !self.severity.is_failure()
    }

    /// All current messages in evaluation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate every rule against `model` without touching stored state.
    pub fn evaluate(&self, model: &M, action: Action) -> FieldOutcome {
        let messages: Vec<Message> = self
            .rules
            .iter()
            .filter(|rule| !rule.evaluate(model, &self.value, action))
            .map(|rule| {
                log::trace!("Field '{}' failed: {}", self.name, rule.message());
                rule.message().clone()
            })
            .collect();

        FieldOutcome::from_messages(messages)
    }

    /// Replace the stored messages and severity with `outcome`.
    ///
    /// Returns whether the field is acceptable.
    pub fn apply(&mut self, outcome: FieldOutcome) -> bool {
        self.messages = outcome.messages;
        self.severity = outcome.severity;
        log::debug!(
            "Field '{}' resolved to {} ({} message(s))",
            self.name,
            self.severity,
            self.messages.len()
        );
        self.is_valid()
    }

    /// Evaluate every rule for `action` and store the outcome.
    pub fn validate(&mut self, model: &M, action: Action) -> bool {
        let outcome = self.evaluate(model, action);
        self.apply(outcome)
    }

    // ========================================================================
    // Message Store
    // ========================================================================

    /// Append a message outside of a validation run.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.refresh_severity();
    }

    /// Texts of the messages with exactly `severity`, in evaluation order.
    pub fn get_messages(&self, severity: Severity) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|message| message.severity() == severity)
            .map(Message::text)
            .collect()
    }

    /// Remove all messages, or only those with the given severity.
    pub fn clear_messages(&mut self, severity: Option<Severity>) {
        match severity {
            None => self.messages.clear(),
            Some(severity) => self.messages.retain(|message| message.severity() != severity),
        }
        self.refresh_severity();
    }

    fn refresh_severity(&mut self) {
        self.severity = Severity::highest(self.messages.iter().map(Message::severity));
    }
}

impl<M, T: Clone> Clone for Field<M, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: self.value.clone(),
            rules: self.rules.clone(),
            messages: self.messages.clone(),
            severity: self.severity,
        }
    }
}

impl<M, T: fmt::Debug> fmt::Debug for Field<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("rules", &self.rules.len())
            .field("messages", &self.messages)
            .field("severity", &self.severity)
            .finish()
    }
}

// ============================================================================
// Type-erased field access
// ============================================================================

/// Object-safe view of a [`Field`] with its value type erased.
///
/// Models register their fields through this trait so fields of different
/// value types can be validated in one pass.
pub trait FieldSlot<M> {
    /// Field name.
    fn name(&self) -> &str;

    /// Severity resolved by the last run.
    fn severity(&self) -> Severity;

    /// Messages stored by the last run.
    fn messages(&self) -> &[Message];

    /// Evaluate the field's rules against `model`.
    fn evaluate(&self, model: &M, action: Action) -> FieldOutcome;

    /// Store an outcome. Returns whether the field is acceptable.
    fn apply(&mut self, outcome: FieldOutcome) -> bool;
}

impl<M, T> FieldSlot<M> for Field<M, T> {
    fn name(&self) -> &str {
        Field::name(self)
    }

    fn severity(&self) -> Severity {
        Field::severity(self)
    }

    fn messages(&self) -> &[Message] {
        Field::messages(self)
    }

    fn evaluate(&self, model: &M, action: Action) -> FieldOutcome {
        Field::evaluate(self, model, action)
    }

    fn apply(&mut self, outcome: FieldOutcome) -> bool {
        Field::apply(self, outcome)
    }
}
