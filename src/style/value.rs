//! Style values: the leaf and group shapes a variant can hold.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::error::ResolveFailure;

/// The variant key consulted when no explicit variant or sub-key is given.
pub const DEFAULT_VARIANT: &str = "default";

/// How many levels of `default` indirection leaf resolution honors.
///
/// A group's `default` entry may itself be a literal or a computed value;
/// a `default` that is *another* group is out of contract and resolution
/// fails over to the fallback table instead.
const MAX_INDIRECTION: usize = 1;

/// A zero-argument callable producing a class string on demand.
///
/// Cheap to clone and safe to share across threads; plain function pointers
/// convert into it, closures go through [`ComputedStyle::new`].
#[derive(Clone)]
pub struct ComputedStyle(Arc<dyn Fn() -> String + Send + Sync>);

impl ComputedStyle {
    /// Wraps a closure as a computed style.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the callable and returns the produced class string.
    pub fn call(&self) -> String {
        (self.0)()
    }
}

impl fmt::Debug for ComputedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ComputedStyle(..)")
    }
}

impl From<fn() -> String> for ComputedStyle {
    fn from(f: fn() -> String) -> Self {
        Self(Arc::new(f))
    }
}

/// A keyed group of style values.
///
/// Groups cover both object shapes the configuration format allows: a
/// `default` entry consumed by plain lookup, and named sub-keys (typically
/// sizes such as `sm`/`md`/`lg`) consumed by sized lookup. Keys keep their
/// insertion order.
///
/// # Example
///
/// ```rust
/// use attire::StyleGroup;
///
/// let sizes = StyleGroup::new()
///     .add("default", "px-4 py-2 text-base")
///     .add("sm", "px-3 py-1.5 text-sm")
///     .add("lg", "px-6 py-3 text-lg");
///
/// assert!(sizes.contains("sm"));
/// assert_eq!(sizes.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleGroup {
    entries: IndexMap<String, StyleValue>,
}

impl StyleGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated group for chaining.
    ///
    /// Adding a key twice keeps the last value.
    pub fn add<V: Into<StyleValue>>(mut self, key: impl Into<String>, value: V) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Returns true if the group has an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the entry keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries in the group.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the group has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A value that produces a style string.
///
/// The three shapes mirror what a variant entry may hold:
///
/// - [`Literal`](StyleValue::Literal): a utility-class string used as-is
/// - [`Computed`](StyleValue::Computed): a zero-argument callable invoked at
///   resolution time
/// - [`Group`](StyleValue::Group): a keyed map, consulted for its `default`
///   entry by plain lookup and for named sub-keys by sized lookup
///
/// Resolution is by explicit match; there is no runtime type sniffing, and
/// a group's `default` is followed through at most one level of indirection.
///
/// # Example
///
/// ```rust
/// use attire::StyleValue;
///
/// let literal: StyleValue = "bg-blue-600 text-white".into();
/// let computed = StyleValue::computed(|| "bg-blue-600 text-white".to_string());
///
/// assert!(literal.is_truthy());
/// assert!(computed.is_truthy());
/// assert!(!StyleValue::from("").is_truthy());
/// ```
#[derive(Debug, Clone)]
pub enum StyleValue {
    /// A literal utility-class string.
    Literal(String),
    /// A callable producing the class string on demand.
    Computed(ComputedStyle),
    /// A keyed group of values (`default` indirection and size maps).
    Group(StyleGroup),
}

impl StyleValue {
    /// Wraps a closure as a computed style value.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        StyleValue::Computed(ComputedStyle::new(f))
    }

    /// Resolves this value to a class string.
    ///
    /// Literals are returned as-is, computed values are invoked, and groups
    /// are followed through their `default` entry with at most
    /// [`MAX_INDIRECTION`] levels of nesting.
    pub(crate) fn resolve(&self) -> Result<String, ResolveFailure> {
        self.resolve_at(0)
    }

    fn resolve_at(&self, depth: usize) -> Result<String, ResolveFailure> {
        match self {
            StyleValue::Literal(classes) => Ok(classes.clone()),
            StyleValue::Computed(computed) => Ok(computed.call()),
            StyleValue::Group(group) => {
                if depth >= MAX_INDIRECTION {
                    return Err(ResolveFailure::TooDeep);
                }
                match group.get(DEFAULT_VARIANT) {
                    Some(value) => value.resolve_at(depth + 1),
                    None => Err(ResolveFailure::NoDefault),
                }
            }
        }
    }

    /// Truthiness as the existence check sees it.
    ///
    /// An empty literal is falsy; computed values and groups are truthy
    /// regardless of what they would resolve to.
    pub fn is_truthy(&self) -> bool {
        match self {
            StyleValue::Literal(classes) => !classes.is_empty(),
            StyleValue::Computed(_) | StyleValue::Group(_) => true,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(classes: &str) -> Self {
        StyleValue::Literal(classes.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(classes: String) -> Self {
        StyleValue::Literal(classes)
    }
}

impl From<fn() -> String> for StyleValue {
    fn from(f: fn() -> String) -> Self {
        StyleValue::Computed(f.into())
    }
}

impl From<ComputedStyle> for StyleValue {
    fn from(computed: ComputedStyle) -> Self {
        StyleValue::Computed(computed)
    }
}

impl From<StyleGroup> for StyleValue {
    fn from(group: StyleGroup) -> Self {
        StyleValue::Group(group)
    }
}
