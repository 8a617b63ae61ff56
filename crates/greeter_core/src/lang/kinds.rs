//! Runtime kind vocabulary.
//!
//! Every value a dynamically typed caller can hand to the greeter belongs to one of these kinds. The canonical
//! spelling is the constructor name a type-introspection facility would report for the value (`Number`, not
//! `number` or `f64`), and it is the exact text embedded in rejection messages.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `"object"` is not a kind name.
//! - Instances of user-defined classes are deliberately absent; they are named by their own constructor.
//!
//! ## Examples
//! ```rust
//! use greeter_core::lang::kinds::{self, KindId};
//!
//! assert_eq!(kinds::from_str("Number"), Some(KindId::Number));
//! assert_eq!(kinds::from_str("Hash"), Some(KindId::Object));
//! assert_eq!(kinds::as_str(KindId::String), "String");
//! ```

use super::registry::{Example, LangItemInfo, Stability};

/// Stable identifier for a runtime kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindId {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
    Date,
}

impl KindId {
    /// Whether values of this kind are accepted as greeting input.
    #[inline]
    pub fn is_textual(self) -> bool {
        matches!(self, KindId::String)
    }
}

/// Metadata for a runtime kind.
pub type KindInfo = LangItemInfo<KindId>;

/// Registry of runtime kinds.
pub const KINDS: &[KindInfo] = &[
    info(
        KindId::String,
        "String",
        &["Text"],
        "Textual value; the only kind accepted as greeting input.",
        &[Example {
            code: r#"greet("World")"#,
            note: Some("Returns `Hello, World`."),
        }],
    ),
    info(
        KindId::Number,
        "Number",
        &[],
        "Numeric value (integer or floating point).",
        &[Example {
            code: "greet(2)",
            note: Some("Fails with `This is not a string. It is a Number.`."),
        }],
    ),
    info(KindId::Boolean, "Boolean", &[], "Truth value.", &[]),
    info(KindId::Null, "Null", &[], "Absence of a value.", &[]),
    info(KindId::Array, "Array", &[], "Ordered sequence of values.", &[]),
    info(
        KindId::Object,
        "Object",
        &["Hash"],
        "Plain keyed structure without a named constructor.",
        &[Example {
            code: r#"greet({ name: "World" })"#,
            note: Some("Fails with `This is not a string. It is a Object.`."),
        }],
    ),
    info(
        KindId::Date,
        "Date",
        &["DateTime"],
        "Point in time.",
        &[Example {
            code: "greet(new Date())",
            note: Some("Fails with `This is not a string. It is a Date.`."),
        }],
    ),
];

/// Resolve a kind name to a [`KindId`].
///
/// ## Returns
/// - `Some(KindId)` if `name` is a canonical spelling or an alias.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<KindId> {
    if let Some(k) = KINDS.iter().find(|k| k.canonical == name) {
        return Some(k.id);
    }
    KINDS.iter().find(|k| k.aliases.contains(&name)).map(|k| k.id)
}

/// Return the canonical display name for a kind (e.g. `"Number"`).
#[inline]
pub fn as_str(id: KindId) -> &'static str {
    info_for(id).canonical
}

/// Return the user-facing description for a kind.
#[inline]
pub fn description(id: KindId) -> &'static str {
    info_for(id).description
}

/// Return the full metadata entry for a kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error; covered by guardrail tests).
pub fn info_for(id: KindId) -> &'static KindInfo {
    KINDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KindId has a registry entry")
}

const fn info(
    id: KindId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    examples: &'static [Example],
) -> KindInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
        stability: Stability::Stable,
        examples,
    }
}
