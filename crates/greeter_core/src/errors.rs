//! Shared user-facing messages for rejected greeting input.
//!
//! The library error (`greeter::GreetError`) and the panicking runtime path both render through
//! [`not_a_string_message`], so the two cannot drift apart.

use core::fmt::Write as _;

/// Leading text of the rejection message, up to the type name.
pub const NOT_A_STRING_PREFIX: &str = "This is not a string. It is a ";

/// Trailing text of the rejection message, after the type name.
pub const NOT_A_STRING_SUFFIX: &str = ".";

/// Literal prefix of every successful greeting.
pub const GREETING_PREFIX: &str = "Hello, ";

/// Format the rejection message for a value whose runtime kind is `type_name`.
///
/// The article is never adjusted: `Object` renders as `It is a Object.`.
///
/// ## Examples
/// ```rust
/// use greeter_core::errors::not_a_string_message;
///
/// assert_eq!(not_a_string_message("Number"), "This is not a string. It is a Number.");
/// ```
pub fn not_a_string_message(type_name: &str) -> String {
    let mut out = String::with_capacity(NOT_A_STRING_PREFIX.len() + type_name.len() + NOT_A_STRING_SUFFIX.len());
    // Writing to String cannot fail.
    let _ = write!(&mut out, "{NOT_A_STRING_PREFIX}{type_name}{NOT_A_STRING_SUFFIX}");
    out
}

/// Build the greeting for an already-validated textual value.
pub fn greeting(name: &str) -> String {
    let mut out = String::with_capacity(GREETING_PREFIX.len() + name.len());
    out.push_str(GREETING_PREFIX);
    out.push_str(name);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_keeps_trailing_period() {
        assert_eq!(not_a_string_message("Date"), "This is not a string. It is a Date.");
    }

    #[test]
    fn message_does_not_adjust_article() {
        assert_eq!(not_a_string_message("Object"), "This is not a string. It is a Object.");
    }

    #[test]
    fn greeting_preserves_input_verbatim() {
        assert_eq!(greeting("  wOrLd\t"), "Hello,   wOrLd\t");
        assert_eq!(greeting(""), "Hello, ");
    }
}
