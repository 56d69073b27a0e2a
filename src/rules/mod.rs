//! Reusable rules and the factory that builds them.

pub mod builtin;
pub mod factory;
pub mod value;

pub use builtin::{max, max_length, min, min_length, not_equal_to, required};
pub use factory::RuleFactory;
pub use value::{Numeric, Presence, TextLength};
