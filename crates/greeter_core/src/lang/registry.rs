//! Shareable metadata for `greeter_core::lang` registries.
//!
//! ## Notes
//! - These types are `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for docs and diagnostics; it carries no behaviour.

/// Describe the lifecycle status of a vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use greeter_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "greet(2)",
///     note: Some("Rejected as a Number."),
/// };
/// assert!(ex.code.starts_with("greet"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for registry-first vocabulary items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description` + `examples`)
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub stability: Stability,
    pub examples: &'static [Example],
}
