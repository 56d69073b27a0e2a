//! Serializable snapshot of a model after validation.

use crate::core::message::Message;
use crate::core::types::{Action, Severity};
use crate::validation::model::Model;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// State of one field in a [`ValidationReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    /// Severity resolved for the field.
    pub severity: Severity,
    /// Whether the field is acceptable.
    pub valid: bool,
    /// Messages in evaluation order.
    pub messages: Vec<Message>,
}

/// Report of a model's last validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Action the model was last validated for, if it was validated at all.
    pub action: Option<Action>,
    /// Severity resolved for the model.
    pub severity: Severity,
    /// Whether the model is acceptable.
    pub valid: bool,
    /// Field states keyed by field name, in registration order.
    pub fields: IndexMap<String, FieldReport>,
}

impl ValidationReport {
    /// Capture the current state of `model`. Does not re-run validation.
    pub fn from_model<M: Model>(model: &M) -> Self {
        let fields = model
            .fields()
            .into_iter()
            .map(|field| {
                let severity = field.severity();
                let report = FieldReport {
                    severity,
                    valid: !severity.is_failure(),
                    messages: field.messages().to_vec(),
                };
                (field.name().to_string(), report)
            })
            .collect();

        Self {
            action: model.state().last_action(),
            severity: model.severity(),
            valid: model.valid(),
            fields,
        }
    }

    /// Get the report for one field.
    pub fn field(&self, name: &str) -> Option<&FieldReport> {
        self.fields.get(name)
    }

    /// Names of fields that resolved to `Warning` or `Error`.
    pub fn failing_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, field)| !field.valid)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Total number of messages across all fields.
    pub fn message_count(&self) -> usize {
        self.fields.values().map(|field| field.messages.len()).sum()
    }

    /// Get a human-readable summary.
    pub fn summary(&self) -> String {
        let action = self
            .action
            .map(|action| action.to_string())
            .unwrap_or_else(|| "no action".to_string());

        if self.valid {
            if self.message_count() == 0 {
                format!("✓ Model is valid for {}", action)
            } else {
                format!(
                    "✓ Model is valid for {} with {} note(s)",
                    action,
                    self.message_count()
                )
            }
        } else {
            format!(
                "✗ Validation failed for {}: {} field(s) with {}",
                action,
                self.failing_fields().len(),
                self.severity
            )
        }
    }

    /// Get one line per message, numbered, with field name and severity.
    pub fn detailed_messages(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|(name, field)| field.messages.iter().map(move |message| (name, message)))
            .enumerate()
            .map(|(i, (name, message))| format!("{}. {}: {}", i + 1, name, message))
            .collect()
    }

    /// Serialize to a pretty JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
