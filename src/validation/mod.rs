//! Rule evaluation and severity aggregation.
//!
//! Rules are evaluated per field, field severities are aggregated per model,
//! and a report captures the result.

pub mod rule;
pub mod field;
pub mod model;
pub mod report;

pub use rule::{Predicate, Rule, RuleBuilder};
pub use field::{Field, FieldOutcome, FieldSlot};
pub use model::{Model, ModelState};
pub use report::{FieldReport, ValidationReport};
