//! Error type for rejected greeting input.
//!
//! The display text is part of the observable contract and is rendered by
//! [`greeter_core::errors::not_a_string_message`].

use greeter_core::errors::not_a_string_message;
use miette::Diagnostic;
use thiserror::Error;

/// Result alias for greeting operations.
pub type GreetResult<T> = Result<T, GreetError>;

/// Errors raised by [`crate::greet`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GreetError {
    /// The input's runtime kind is not textual.
    #[error("{}", not_a_string_message(.type_name))]
    #[diagnostic(
        code(greeter::not_textual_input),
        help("only textual values can be greeted; pass a string")
    )]
    NotTextualInput { type_name: String },
}

impl GreetError {
    /// Create a `NotTextualInput` error for a value of kind `type_name`.
    pub fn not_textual(type_name: impl Into<String>) -> Self {
        GreetError::NotTextualInput {
            type_name: type_name.into(),
        }
    }

    /// Display name of the rejected value's kind.
    pub fn type_name(&self) -> &str {
        match self {
            GreetError::NotTextualInput { type_name } => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_canonical_message() {
        let err = GreetError::not_textual("Number");
        assert_eq!(err.to_string(), "This is not a string. It is a Number.");
        assert_eq!(err.type_name(), "Number");
    }

    #[test]
    fn diagnostic_code_is_stable() {
        let err = GreetError::not_textual("Date");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("greeter::not_textual_input"));
    }
}
