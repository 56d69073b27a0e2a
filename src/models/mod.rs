//! Example models built on the validation framework.

pub mod login;

pub use login::{LoginInput, LoginModel};
