//! # fieldguard - Declarative field validation
//!
//! fieldguard validates data models field by field. Every field carries an
//! ordered list of rules; failing rules produce messages classified by
//! severity, and severities are aggregated first per field and then per
//! model.
//!
//! ## Features
//!
//! - **Severity aggregation**: `Error > Warning > Success > Info > None`, with
//!   the same outcome regardless of rule order
//! - **Action-aware rules**: rules are skipped for the operations they do not
//!   apply to (built-in rules skip `Get`, `List` and `Delete`)
//! - **Cross-field rules**: predicates receive the whole model
//! - **Reports**: serializable snapshots of model and field states
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldguard::prelude::*;
//!
//! let input = LoginInput {
//!     username: Some("alice".to_string()),
//!     password: Some("alice".to_string()),
//! };
//!
//! let mut model = LoginModel::new(&input);
//! assert!(!model.validate(Action::Create));
//! assert_eq!(
//!     model.password.get_messages(Severity::Warning),
//!     vec!["Username and password cannot be equal"]
//! );
//!
//! // Reads do not carry a payload, so the same model passes.
//! assert!(model.validate(Action::Get));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Severity, action, message, error and configuration types
//! - [`validation`]: Rules, fields, models and reports
//! - [`rules`]: Built-in rules and the factory that configures them
//! - [`models`]: Example models
//!
//! ## Defining a Model
//!
//! Models register their fields explicitly:
//!
//! ```rust,ignore
//! use fieldguard::prelude::*;
//!
//! struct Signup {
//!     email: Field<Signup, Option<String>>,
//!     age: Field<Signup, Option<u32>>,
//!     state: ModelState,
//! }
//!
//! impl Signup {
//!     fn new(email: Option<String>, age: Option<u32>) -> Self {
//!         Self {
//!             email: Field::new("email", email).with_rule(required("Email")),
//!             age: Field::new("age", age).with_rules(vec![required("Age"), min(13.0, "Age")]),
//!             state: ModelState::new(),
//!         }
//!     }
//! }
//!
//! impl Model for Signup {
//!     fn state(&self) -> &ModelState { &self.state }
//!     fn state_mut(&mut self) -> &mut ModelState { &mut self.state }
//!     fn fields(&self) -> Vec<&dyn FieldSlot<Self>> {
//!         vec![&self.email as &dyn FieldSlot<Self>, &self.age as &dyn FieldSlot<Self>]
//!     }
//!     fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot<Self>> {
//!         vec![&mut self.email as &mut dyn FieldSlot<Self>, &mut self.age as &mut dyn FieldSlot<Self>]
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod models;
pub mod rules;
pub mod validation;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use fieldguard::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{Action, ActionSet, Severity};
    pub use crate::core::message::Message;
    pub use crate::core::config::RuleConfig;

    // Errors
    pub use crate::core::error::{
        ConfigError, FieldguardError, FieldguardResult, RuleError, RuleResult,
    };

    // Validation
    pub use crate::validation::field::{Field, FieldOutcome, FieldSlot};
    pub use crate::validation::model::{Model, ModelState};
    pub use crate::validation::report::{FieldReport, ValidationReport};
    pub use crate::validation::rule::{Predicate, Rule, RuleBuilder};

    // Rules
    pub use crate::rules::builtin::{max, max_length, min, min_length, not_equal_to, required};
    pub use crate::rules::factory::RuleFactory;
    pub use crate::rules::value::{Numeric, Presence, TextLength};

    // Models
    pub use crate::models::login::{LoginInput, LoginModel};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
