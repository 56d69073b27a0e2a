//! Models: an explicitly registered set of fields with one aggregate state.

use crate::core::types::{Action, Severity};
use crate::validation::field::{FieldOutcome, FieldSlot};
use crate::validation::report::ValidationReport;
use serde::{Deserialize, Serialize};

/// Aggregate state stored on every model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelState {
    severity: Severity,
    last_action: Option<Action>,
}

impl ModelState {
    /// Create a state that has never been validated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Severity resolved by the last run.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Action of the last run, if any.
    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    /// Whether the model is acceptable.
    pub fn is_valid(&self) -> bool {
        !self.severity.is_failure()
    }

    fn record(&mut self, severity: Severity, action: Action) {
        self.severity = severity;
        self.last_action = Some(action);
    }
}

/// A data model made of named fields.
///
/// Implementors embed a [`ModelState`] and list their fields, in a fixed
/// order, from [`fields`](Model::fields) and [`fields_mut`](Model::fields_mut).
/// Both methods must return the same fields in the same order.
///
/// ```rust,ignore
/// struct Signup {
///     email: Field<Signup, Option<String>>,
///     age: Field<Signup, Option<u32>>,
///     state: ModelState,
/// }
///
/// impl Model for Signup {
///     fn state(&self) -> &ModelState { &self.state }
///     fn state_mut(&mut self) -> &mut ModelState { &mut self.state }
///     fn fields(&self) -> Vec<&dyn FieldSlot<Self>> { vec![&self.email, &self.age] }
///     fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot<Self>> {
///         vec![&mut self.email, &mut self.age]
///     }
/// }
/// ```
pub trait Model: Sized {
    /// Aggregate state.
    fn state(&self) -> &ModelState;

    /// Mutable aggregate state.
    fn state_mut(&mut self) -> &mut ModelState;

    /// Registered fields in declaration order.
    fn fields(&self) -> Vec<&dyn FieldSlot<Self>>;

    /// Registered fields in declaration order, mutably.
    fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot<Self>>;

    /// Validate every field for `action` and resolve the model severity.
    ///
    /// All fields are evaluated against the model as it is before any field
    /// state changes, then each outcome is stored. Returns whether the model
    /// is acceptable.
    ///
    /// # Panics
    ///
    /// Panics if [`fields`](Model::fields) and [`fields_mut`](Model::fields_mut)
    /// disagree on the registered fields or their order.
    fn validate(&mut self, action: Action) -> bool {
        let this: &Self = self;
        let outcomes: Vec<(String, FieldOutcome)> = this
            .fields()
            .into_iter()
            .map(|field| (field.name().to_string(), field.evaluate(this, action)))
            .collect();

        let fields = self.fields_mut();
        assert_eq!(
            fields.len(),
            outcomes.len(),
            "fields() and fields_mut() must register the same fields"
        );

        let mut valid = true;
        let mut observed = Vec::with_capacity(outcomes.len());
        for (field, (name, outcome)) in fields.into_iter().zip(outcomes) {
            assert_eq!(
                field.name(),
                name,
                "fields() and fields_mut() must list fields in the same order"
            );
            valid = field.apply(outcome) && valid;
            match field.severity() {
                Severity::None => {}
                severity => observed.push(severity),
            }
        }

        let severity = Severity::highest(observed);
        debug_assert_eq!(valid, !severity.is_failure());

        self.state_mut().record(severity, action);
        log::debug!("Model validated for {}: {}", action, severity);

        valid
    }

    /// Whether the last run left the model acceptable.
    fn valid(&self) -> bool {
        self.state().is_valid()
    }

    /// Severity resolved by the last run.
    fn severity(&self) -> Severity {
        self.state().severity()
    }

    /// Look up a registered field by name.
    fn field(&self, name: &str) -> Option<&dyn FieldSlot<Self>> {
        self.fields().into_iter().find(|field| field.name() == name)
    }

    /// Snapshot of the model and field states.
    fn report(&self) -> ValidationReport {
        ValidationReport::from_model(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Message;
    use crate::validation::field::Field;
    use crate::validation::rule::Rule;

    struct Range {
        low: Field<Range, i64>,
        high: Field<Range, i64>,
        label: Field<Range, String>,
        state: ModelState,
    }

    impl Range {
        fn new(low: i64, high: i64, label: &str) -> Self {
            Self {
                low: Field::new("low", low).with_rule(Rule::new(
                    |_, value: &i64| *value >= 0,
                    "Low can't be negative",
                    Severity::Error,
                )),
                high: Field::new("high", high).with_rule(Rule::new(
                    |model: &Range, value: &i64| *value > *model.low.value(),
                    "High must exceed low",
                    Severity::Warning,
                )),
                label: Field::new("label", label.to_string()).with_rule(Rule::new(
                    |_, value: &String| value.len() > 3,
                    "Short labels are hard to search",
                    Severity::Info,
                )),
                state: ModelState::new(),
            }
        }
    }

    impl Model for Range {
        fn state(&self) -> &ModelState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut ModelState {
            &mut self.state
        }

        fn fields(&self) -> Vec<&dyn FieldSlot<Self>> {
            vec![
                &self.low as &dyn FieldSlot<Self>,
                &self.high as &dyn FieldSlot<Self>,
                &self.label as &dyn FieldSlot<Self>,
            ]
        }

        fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot<Self>> {
            vec![
                &mut self.low as &mut dyn FieldSlot<Self>,
                &mut self.high as &mut dyn FieldSlot<Self>,
                &mut self.label as &mut dyn FieldSlot<Self>,
            ]
        }
    }

    #[test]
    fn test_unvalidated_model() {
        let model = Range::new(1, 2, "range");
        assert!(model.valid());
        assert_eq!(model.severity(), Severity::None);
        assert_eq!(model.state().last_action(), None);
    }

    #[test]
    fn test_valid_model_resolves_to_none() {
        let mut model = Range::new(1, 5, "widths");
        assert!(model.validate(Action::Create));
        assert!(model.valid());
        assert_eq!(model.severity(), Severity::None);
        assert_eq!(model.state().last_action(), Some(Action::Create));
    }

    #[test]
    fn test_informational_field_does_not_invalidate() {
        let mut model = Range::new(1, 5, "w");
        assert!(model.validate(Action::Update));
        assert_eq!(model.severity(), Severity::Info);
        assert_eq!(model.label.get_messages(Severity::Info).len(), 1);
    }

    #[test]
    fn test_cross_field_warning() {
        let mut model = Range::new(4, 2, "widths");
        assert!(!model.validate(Action::Create));
        assert_eq!(model.severity(), Severity::Warning);
        assert_eq!(model.high.severity(), Severity::Warning);
        assert_eq!(model.low.severity(), Severity::None);
    }

    #[test]
    fn test_error_outranks_warning() {
        let mut model = Range::new(-1, -3, "widths");
        assert!(!model.validate(Action::Create));
        assert_eq!(model.low.severity(), Severity::Error);
        assert_eq!(model.high.severity(), Severity::Warning);
        assert_eq!(model.severity(), Severity::Error);
    }

    #[test]
    fn test_read_actions_skip_default_rules() {
        let mut model = Range::new(-1, -3, "w");
        assert!(model.validate(Action::List));
        assert_eq!(model.severity(), Severity::None);
        assert!(model.low.messages().is_empty());
    }

    #[test]
    fn test_revalidation_recovers() {
        let mut model = Range::new(4, 2, "widths");
        assert!(!model.validate(Action::Update));

        model.high.set_value(10);
        assert!(model.validate(Action::Update));
        assert!(model.valid());
        assert!(model.high.messages().is_empty());
    }

    #[test]
    fn test_validity_matches_field_states() {
        for (low, high) in [(0, 1), (3, 1), (-2, 5), (-2, -4)] {
            let mut model = Range::new(low, high, "labels");
            let valid = model.validate(Action::Create);
            let any_failing = model.fields().iter().any(|f| f.severity().is_failure());
            assert_eq!(valid, !any_failing);
            assert_eq!(model.valid(), valid);
        }
    }

    #[test]
    fn test_manual_message_is_not_reverted_until_revalidate() {
        let mut model = Range::new(1, 5, "widths");
        model.validate(Action::Create);
        model.low.add_message(Message::error("Locked by another user"));
        assert_eq!(model.low.severity(), Severity::Error);

        model.validate(Action::Create);
        assert_eq!(model.low.severity(), Severity::None);
    }

    #[test]
    fn test_field_lookup() {
        let model = Range::new(1, 5, "widths");
        assert_eq!(model.field("high").map(|f| f.name()), Some("high"));
        assert!(model.field("width").is_none());
    }

    struct Pair {
        a: Field<Pair, i64>,
        b: Field<Pair, i64>,
        state: ModelState,
        swap_mut: bool,
    }

    fn positive() -> Rule<Pair, i64> {
        Rule::new(|_, value: &i64| *value > 0, "Must be positive", Severity::Error)
    }

    impl Pair {
        fn new(swap_mut: bool) -> Self {
            Self {
                a: Field::new("a", 1).with_rule(positive()),
                b: Field::new("b", -1).with_rule(positive()),
                state: ModelState::new(),
                swap_mut,
            }
        }
    }

    impl Model for Pair {
        fn state(&self) -> &ModelState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut ModelState {
            &mut self.state
        }

        fn fields(&self) -> Vec<&dyn FieldSlot<Self>> {
            vec![&self.a as &dyn FieldSlot<Self>, &self.b as &dyn FieldSlot<Self>]
        }

        fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot<Self>> {
            if self.swap_mut {
                vec![
                    &mut self.b as &mut dyn FieldSlot<Self>,
                    &mut self.a as &mut dyn FieldSlot<Self>,
                ]
            } else {
                vec![&mut self.a as &mut dyn FieldSlot<Self>]
            }
        }
    }

    #[test]
    #[should_panic(expected = "must register the same fields")]
    fn test_missing_mutable_registration_panics() {
        let mut model = Pair::new(false);
        model.validate(Action::Create);
    }

    #[test]
    #[should_panic(expected = "must list fields in the same order")]
    fn test_reordered_mutable_registration_panics() {
        let mut model = Pair::new(true);
        model.validate(Action::Create);
    }
}
