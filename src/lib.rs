#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Type-guarded greeting for dynamically typed values.
//!
//! [`greet`] accepts a value of any runtime kind. Textual input is greeted as `"Hello, " + input`; anything else is
//! rejected with a message naming the value's kind, e.g. `This is not a string. It is a Number.`.
//!
//! ## Panic Policy
//!
//! - **Library code**: returns [`GreetResult`]; only [`runtime::say_hello`] panics, by contract.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod errors;
pub mod greet;
pub mod runtime;
pub mod value;

pub use errors::{GreetError, GreetResult};
pub use greet::greet;
pub use value::DynamicValue;
