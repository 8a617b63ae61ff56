//! The greeting operation.

use greeter_core::errors::greeting;
use tracing::debug;

use crate::errors::{GreetError, GreetResult};
use crate::value::DynamicValue;

/// Greet a value of arbitrary runtime kind.
///
/// Textual input yields `"Hello, " + input`, unmodified. Any other kind fails with
/// [`GreetError::NotTextualInput`], whose message names the rejected kind.
///
/// ## Examples
/// ```rust
/// use greeter::{DynamicValue, greet};
///
/// assert_eq!(greet("World").unwrap(), "Hello, World");
///
/// let err = greet(DynamicValue::object([("name", "World")])).unwrap_err();
/// assert_eq!(err.to_string(), "This is not a string. It is a Object.");
/// ```
pub fn greet(value: impl Into<DynamicValue>) -> GreetResult<String> {
    let value = value.into();
    match value.as_text() {
        Some(name) => Ok(greeting(name)),
        None => {
            let type_name = value.type_name();
            debug!(type_name, "rejected non-textual greeting input");
            Err(GreetError::not_textual(type_name))
        }
    }
}
