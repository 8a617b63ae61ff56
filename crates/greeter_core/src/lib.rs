//! Provide the canonical runtime-kind vocabulary and user-facing message text for the greeter.
//!
//! This crate is intentionally small and dependency-free. It holds the pieces that both the library error type and
//! the panicking runtime entry point must agree on:
//! - the registry of runtime kinds and their display names ([`lang::kinds`]), and
//! - the exact wording of the rejection message ([`errors`]).
//!
//! ## Notes
//!
//! - No IO, no global state, no dependency on the value representation used by callers.

pub mod errors;
pub mod lang;
