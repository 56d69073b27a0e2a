//! Core types for the fieldguard validation framework.
//!
//! This module contains the foundational types every other layer builds on:
//! - Severity and action enums
//! - Messages produced by failing rules
//! - Error types
//! - Rule configuration

pub mod types;
pub mod message;
pub mod error;
pub mod config;

// Re-export commonly used types
pub use types::{Action, ActionSet, Severity};
pub use message::Message;
pub use error::{ConfigError, FieldguardError, FieldguardResult, RuleError};
pub use config::RuleConfig;
