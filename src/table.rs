//! The dispatch table: match values to handler lists, plus a default.
//!
//! Tables are produced by [`crate::collector::build`] and never change
//! afterwards. Invariants held by every table:
//!
//! - every bound value maps to a non-empty handler list
//! - there is at most one default handler
//! - a list holds more than one handler only when duplicates were allowed

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::handler::Handler;

/// Immutable mapping from match values to handlers.
pub struct DispatchTable<K> {
    /// Handlers per match value, in declaration order.
    pub(crate) bindings: HashMap<K, Vec<Arc<dyn Handler>>>,
    /// Fallback handler.
    pub(crate) default: Option<Arc<dyn Handler>>,
    /// Whether multi-bind was allowed at construction.
    pub(crate) allow_duplicates: bool,
}

impl<K: Eq + Hash> DispatchTable<K> {
    pub(crate) fn new(allow_duplicates: bool) -> Self {
        Self {
            bindings: HashMap::new(),
            default: None,
            allow_duplicates,
        }
    }

    /// Handlers bound to `value`, in invocation order.
    pub fn handlers<Q>(&self, value: &Q) -> Option<&[Arc<dyn Handler>]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bindings.get(value).map(Vec::as_slice)
    }

    /// Check whether `value` has an explicit binding.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bindings.contains_key(value)
    }

    /// The default handler, if one was declared.
    pub fn default_handler(&self) -> Option<&Arc<dyn Handler>> {
        self.default.as_ref()
    }

    /// Whether a default handler was declared.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Whether multi-bind was allowed at construction.
    pub fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Iterate over the bound match values (arbitrary order).
    pub fn values(&self) -> impl Iterator<Item = &K> {
        self.bindings.keys()
    }

    /// Number of distinct bound match values.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no match value is bound (a default may still exist).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for DispatchTable<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bindings: Vec<(&K, usize)> = self
            .bindings
            .iter()
            .map(|(value, handlers)| (value, handlers.len()))
            .collect();

        f.debug_struct("DispatchTable")
            .field("bindings", &bindings)
            .field("has_default", &self.default.is_some())
            .field("allow_duplicates", &self.allow_duplicates)
            .finish()
    }
}
