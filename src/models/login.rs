//! Login form model.
//!
//! Both fields are required and limited to [`MAX_LENGTH`] characters, and the
//! password must not repeat the username.

use crate::core::error::FieldguardResult;
use crate::rules::factory::RuleFactory;
use crate::validation::field::{Field, FieldSlot};
use crate::validation::model::{Model, ModelState};
use crate::validation::rule::Rule;
use serde::{Deserialize, Serialize};

/// Maximum length of the username and the password.
pub const MAX_LENGTH: usize = 50;

/// Raw login payload, as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInput {
    /// Submitted username
    #[serde(default)]
    pub username: Option<String>,
    /// Submitted password
    #[serde(default)]
    pub password: Option<String>,
}

/// Validated login form.
#[derive(Debug, Clone)]
pub struct LoginModel {
    /// Username field
    pub username: Field<LoginModel, Option<String>>,
    /// Password field
    pub password: Field<LoginModel, Option<String>>,
    state: ModelState,
}

impl LoginModel {
    /// Build a model from `input` with the default rule settings.
    ///
    /// The input is copied, so later changes to it do not reach the model.
    pub fn new(input: &LoginInput) -> Self {
        Self::with_factory(input, &RuleFactory::new())
    }

    /// Build a model using `factory` for the built-in rules.
    pub fn with_factory(input: &LoginInput, factory: &RuleFactory) -> Self {
        let input = input.clone();

        Self {
            username: Field::new("username", supplied(input.username)).with_rules(vec![
                factory.required("Username"),
                factory.max_length(MAX_LENGTH, "Username"),
            ]),
            password: Field::new("password", supplied(input.password)).with_rules(vec![
                factory.required("Password"),
                factory.max_length(MAX_LENGTH, "Password"),
                credentials_differ(factory),
            ]),
            state: ModelState::new(),
        }
    }

    /// Build a model from an untrusted JSON value.
    pub fn from_json(value: &serde_json::Value) -> FieldguardResult<Self> {
        Self::from_json_with(value, &RuleFactory::new())
    }

    /// Build a model from an untrusted JSON value using `factory`.
    pub fn from_json_with(value: &serde_json::Value, factory: &RuleFactory) -> FieldguardResult<Self> {
        let input: LoginInput = serde_json::from_value(value.clone())?;
        Ok(Self::with_factory(&input, factory))
    }

    /// Build a model from a JSON document.
    pub fn from_json_str(json: &str) -> FieldguardResult<Self> {
        let input: LoginInput = serde_json::from_str(json)?;
        Ok(Self::new(&input))
    }
}

impl Model for LoginModel {
    fn state(&self) -> &ModelState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ModelState {
        &mut self.state
    }

    fn fields(&self) -> Vec<&dyn FieldSlot<Self>> {
        vec![
            &self.username as &dyn FieldSlot<Self>,
            &self.password as &dyn FieldSlot<Self>,
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut dyn FieldSlot<Self>> {
        vec![
            &mut self.username as &mut dyn FieldSlot<Self>,
            &mut self.password as &mut dyn FieldSlot<Self>,
        ]
    }
}

// Empty strings count as not submitted.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

fn credentials_differ(factory: &RuleFactory) -> Rule<LoginModel, Option<String>> {
    factory.not_equal_to(
        |model: &LoginModel| model.username.value(),
        "Username and password cannot be equal",
    )
}
