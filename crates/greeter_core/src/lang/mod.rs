//! Runtime vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. [`kinds::KindId`]) and look up display names and metadata via registry
//! tables, instead of scattering string literals like `"Number"` across the codebase.
//!
//! ## Examples
//! ```rust
//! use greeter_core::lang::kinds::{self, KindId};
//!
//! assert_eq!(kinds::from_str("Date"), Some(KindId::Date));
//! assert_eq!(kinds::as_str(KindId::Object), "Object");
//! ```

pub mod kinds;
pub mod registry;
