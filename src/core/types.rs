//! Outcome and context types shared by rules, fields, and models.
//!
//! Both types are closed enums:
//! - `Severity` classifies what a failing rule means and is folded upward
//!   from rules to fields to models.
//! - `Action` is the operation a validation run is performed for, and is only
//!   ever used as a filter key when deciding whether a rule applies.

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Ranked outcome classification.
///
/// Variants are declared in ascending rank, so the derived ordering matches
/// aggregation precedence: `Error > Warning > Success > Info > None`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No outcome at all
    #[default]
    None,
    /// Informational annotation
    Info,
    /// Positive annotation (e.g. "strength: OK")
    Success,
    /// The value did not pass, soft failure
    Warning,
    /// The value did not pass, hard failure
    Error,
}

impl Severity {
    /// Integer rank used for aggregation.
    pub fn rank(self) -> u8 {
        match self {
            Severity::None => 0,
            Severity::Info => 1,
            Severity::Success => 2,
            Severity::Warning => 3,
            Severity::Error => 4,
        }
    }

    /// Whether this severity makes a field or model unacceptable.
    pub fn is_failure(self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }

    /// Resolve a collection of severities to the highest-ranked one.
    ///
    /// An empty collection resolves to [`Severity::None`]. The result does not
    /// depend on iteration order.
    pub fn highest<I>(severities: I) -> Severity
    where
        I: IntoIterator<Item = Severity>,
    {
        severities
            .into_iter()
            .max_by_key(|severity| severity.rank())
            .unwrap_or(Severity::None)
    }

    /// Get the lowercase name of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// All severities, lowest rank first.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::None,
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation context a validation run is performed for.
///
/// Serialized as its lowercase tag; deserialized through [`FromStr`], so tags
/// are case-insensitive wherever they come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Action {
    /// A new record is being created
    Create,
    /// An existing record is being changed
    Update,
    /// A single record is being read
    Get,
    /// Records are being listed
    List,
    /// A record is being removed
    Delete,
}

impl Action {
    /// Get the lowercase tag of this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Get => "get",
            Action::List => "list",
            Action::Delete => "delete",
        }
    }

    /// Whether the action carries no new payload.
    pub fn is_read_only(self) -> bool {
        matches!(self, Action::Get | Action::List | Action::Delete)
    }

    /// All actions in declaration order.
    pub fn all() -> &'static [Action] {
        &[
            Action::Create,
            Action::Update,
            Action::Get,
            Action::List,
            Action::Delete,
        ]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Action::all()
            .iter()
            .copied()
            .find(|action| action.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ConfigError::UnknownAction(tag.to_string()))
    }
}

impl TryFrom<String> for Action {
    type Error = ConfigError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

/// Unique, ordered collection of actions.
///
/// Rules use this as the set of actions they are skipped for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionSet(BTreeSet<Action>);

impl ActionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// The read/removal actions: `Get`, `List` and `Delete`.
    ///
    /// This is the default skip set of every built-in rule.
    pub fn read_only() -> Self {
        Action::all()
            .iter()
            .copied()
            .filter(|action| action.is_read_only())
            .collect()
    }

    /// Add an action. Returns false if it was already present.
    pub fn insert(&mut self, action: Action) -> bool {
        self.0.insert(action)
    }

    /// Remove an action. Returns false if it was not present.
    pub fn remove(&mut self, action: Action) -> bool {
        self.0.remove(&action)
    }

    /// Check membership.
    pub fn contains(&self, action: Action) -> bool {
        self.0.contains(&action)
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.0.iter().copied()
    }

    /// Number of actions in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Action; N]> for ActionSet {
    fn from(actions: [Action; N]) -> Self {
        actions.into_iter().collect()
    }
}

impl From<&[Action]> for ActionSet {
    fn from(actions: &[Action]) -> Self {
        actions.iter().copied().collect()
    }
}

impl From<Vec<Action>> for ActionSet {
    fn from(actions: Vec<Action>) -> Self {
        actions.into_iter().collect()
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.iter().map(Action::as_str).collect();
        write!(f, "{{{}}}", tags.join(", "))
    }
}
