//! Built-in rules with default settings.
//!
//! Each function is shorthand for the matching [`RuleFactory`] method on a
//! default factory: rules are skipped for `Get`, `List` and `Delete`, fail
//! with a warning, and length rules count `"characters"`.
//!
//! ```rust,ignore
//! let username = Field::new("username", input.username)
//!     .with_rule(required("Username"))
//!     .with_rule(max_length(50, "Username"));
//! ```

use crate::rules::factory::RuleFactory;
use crate::rules::value::{Numeric, Presence, TextLength};
use crate::validation::rule::Rule;

/// `"{label} is required"`
pub fn required<M: 'static, T: Presence + 'static>(label: &str) -> Rule<M, T> {
    RuleFactory::new().required(label)
}

/// `"{label} can't be lower than {min}"`
pub fn min<M: 'static, T: Numeric + 'static>(min: f64, label: &str) -> Rule<M, T> {
    RuleFactory::new().min(min, label)
}

/// `"{label} can't be higher than {max}"`
pub fn max<M: 'static, T: Numeric + 'static>(max: f64, label: &str) -> Rule<M, T> {
    RuleFactory::new().max(max, label)
}

/// `"{label} can't have less than {min} characters"`
pub fn min_length<M: 'static, T: TextLength + 'static>(min: usize, label: &str) -> Rule<M, T> {
    RuleFactory::new().min_length(min, label)
}

/// `"{label} can't have more than {max} characters"`
pub fn max_length<M: 'static, T: TextLength + 'static>(max: usize, label: &str) -> Rule<M, T> {
    RuleFactory::new().max_length(max, label)
}

/// Value must differ from the one `other` selects on the model.
pub fn not_equal_to<M, T, F>(other: F, text: impl Into<String>) -> Rule<M, T>
where
    M: 'static,
    T: PartialEq + 'static,
    F: Fn(&M) -> &T + Send + Sync + 'static,
{
    RuleFactory::new().not_equal_to(other, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Action, Severity};
    use crate::validation::field::Field;

    #[test]
    fn test_required_string_field_on_create() {
        let mut field: Field<(), Option<String>> =
            Field::new("username", None).with_rule(required("Username"));

        assert!(!field.validate(&(), Action::Create));
        assert_eq!(field.severity(), Severity::Warning);
        assert_eq!(field.get_messages(Severity::Warning), vec!["Username is required"]);
    }

    #[test]
    fn test_required_string_field_on_get() {
        let mut field: Field<(), Option<String>> =
            Field::new("username", None).with_rule(required("Username"));

        assert!(field.validate(&(), Action::Get));
        assert!(field.messages().is_empty());
        assert_eq!(field.severity(), Severity::None);
    }

    #[test]
    fn test_max_length_on_update() {
        let mut field: Field<(), String> =
            Field::new("username", "x".repeat(51)).with_rule(max_length(50, "Username"));

        assert!(!field.validate(&(), Action::Update));
        assert_eq!(
            field.get_messages(Severity::Warning),
            vec!["Username can't have more than 50 characters"]
        );

        field.set_value("x".repeat(50));
        assert!(field.validate(&(), Action::Update));
    }

    #[test]
    fn test_numeric_field() {
        let mut field: Field<(), Option<u32>> = Field::new("age", Some(12))
            .with_rules(vec![required("Age"), min(13.0, "Age"), max(130.0, "Age")]);

        assert!(!field.validate(&(), Action::Create));
        assert_eq!(field.get_messages(Severity::Warning), vec!["Age can't be lower than 13"]);

        field.set_value(Some(40));
        assert!(field.validate(&(), Action::Create));
    }

    #[test]
    fn test_min_length_counts_characters() {
        let rule: Rule<(), String> = min_length(4, "Pin");
        assert!(!rule.evaluate(&(), &"ñañ".to_string(), Action::Create));
        assert!(rule.evaluate(&(), &"ñañá".to_string(), Action::Create));
    }

    #[test]
    fn test_not_equal_to() {
        struct Transfer {
            from: Field<Transfer, String>,
        }
        let rule: Rule<Transfer, String> =
            not_equal_to(|t: &Transfer| t.from.value(), "Accounts must differ");
        let transfer = Transfer {
            from: Field::new("from", "ACC-1".to_string()),
        };
        assert!(!rule.evaluate(&transfer, &"ACC-1".to_string(), Action::Create));
        assert!(rule.evaluate(&transfer, &"ACC-2".to_string(), Action::Create));
    }
}
