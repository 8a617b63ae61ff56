//! Throwing entry point for dynamically typed callers.
//!
//! Callers that expect raise semantics (rather than a `Result`) use [`say_hello`]. The panic payload is the same
//! canonical message carried by [`crate::GreetError`].

use core::fmt::Display;

use crate::greet::greet;
use crate::value::DynamicValue;

/// Raise a runtime error (implemented as a panic) with canonical formatting.
#[cold]
#[track_caller]
pub fn raise(err: impl Display) -> ! {
    panic!("{err}");
}

/// Greet `value`, raising on non-textual input.
///
/// ## Panics
/// - `This is not a string. It is a <TypeName>.` if `value` is not textual.
#[track_caller]
pub fn say_hello(value: impl Into<DynamicValue>) -> String {
    greet(value).unwrap_or_else(|err| raise(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn say_hello_ok() {
        assert_eq!(say_hello("World"), "Hello, World");
    }

    #[test]
    #[should_panic(expected = "This is not a string. It is a Number.")]
    fn say_hello_number_panics() {
        let _ = say_hello(3);
    }

    #[test]
    #[should_panic(expected = "This is not a string. It is a Boolean.")]
    fn say_hello_boolean_panics() {
        let _ = say_hello(false);
    }
}
