//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Pre-storage URL screening

pub mod code_generator;
pub mod url_validator;
