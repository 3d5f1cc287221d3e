//! Declaration module - the entries a switch is built from.
//!
//! A switch body is an ordered list of [`Entry`] values. Each entry pairs an
//! authoring name with a [`Declaration`]:
//!
//! - `Case` - a handler bound to one or more match values
//! - `Default` - the fallback handler
//! - `Attribute` - an opaque value carried through to the built switch
//!
//! # Example
//!
//! ```
//! use switchcase::declare::{attribute, case, default, Entry};
//! use switchcase::CallArgs;
//!
//! let entries: Vec<Entry<String>> = vec![
//!     Entry::new("_", case(["play"])?.handle(|_: &CallArgs| Ok("play"))),
//!     Entry::new("_", case(["exit", "quit"])?.handle(|_: &CallArgs| Ok("exit"))),
//!     Entry::new("_", default(|_: &CallArgs| Ok("unknown"))),
//!     Entry::new("version", attribute(3)),
//! ];
//! assert_eq!(entries.len(), 4);
//! # Ok::<(), switchcase::SwitchError>(())
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SwitchError};
use crate::handler::{CallArgs, FnHandler, Handler, TypedHandler};

/// Name used for bindings that should not be addressable by name.
pub const PLACEHOLDER_NAME: &str = "_";

/// One declaration in a switch body.
#[derive(Clone)]
pub enum Declaration<K> {
    /// Handler bound to a list of match values. The list must not be empty.
    Case {
        /// The handler to run on match.
        handler: Arc<dyn Handler>,
        /// Values this handler matches, in declared order.
        values: Vec<K>,
    },
    /// Handler that runs when no case matches.
    Default {
        /// The fallback handler.
        handler: Arc<dyn Handler>,
    },
    /// Opaque attribute, not part of dispatch.
    Attribute(Value),
}

impl<K> Declaration<K> {
    /// True for `Case` and `Default`.
    pub fn is_binding(&self) -> bool {
        !matches!(self, Declaration::Attribute(_))
    }

    /// The bound handler, if this is a binding.
    pub fn handler(&self) -> Option<&Arc<dyn Handler>> {
        match self {
            Declaration::Case { handler, .. } | Declaration::Default { handler } => Some(handler),
            Declaration::Attribute(_) => None,
        }
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for Declaration<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Declaration::Case { values, .. } => {
                f.debug_struct("Case").field("values", values).finish_non_exhaustive()
            }
            Declaration::Default { .. } => f.debug_struct("Default").finish_non_exhaustive(),
            Declaration::Attribute(value) => f.debug_tuple("Attribute").field(value).finish(),
        }
    }
}

/// A named declaration, in the order it appears in the switch body.
#[derive(Debug, Clone)]
pub struct Entry<K> {
    /// Authoring name (`_` for anonymous handlers).
    pub name: String,
    /// What was declared under that name.
    pub declaration: Declaration<K>,
}

impl<K> Entry<K> {
    /// Create a new entry.
    pub fn new(name: impl Into<String>, declaration: Declaration<K>) -> Self {
        Self {
            name: name.into(),
            declaration,
        }
    }

    /// True when the name makes the entry externally addressable:
    /// anything except `_` and names starting with an underscore.
    pub fn is_public(&self) -> bool {
        is_public_name(&self.name)
    }
}

/// True for names that are neither the placeholder nor underscore-prefixed.
pub fn is_public_name(name: &str) -> bool {
    !name.is_empty() && name != PLACEHOLDER_NAME && !name.starts_with('_')
}

/// Match values awaiting a handler, as returned by [`case`].
#[derive(Debug, Clone)]
pub struct CaseDecl<K> {
    values: Vec<K>,
}

impl<K> CaseDecl<K> {
    /// The match values, in declared order.
    pub fn values(&self) -> &[K] {
        &self.values
    }

    /// Bind a closure that reads its own arguments.
    pub fn handle<F, R>(self, handler: F) -> Declaration<K>
    where
        F: Fn(&CallArgs) -> Result<R> + Send + Sync + 'static,
        R: Serialize + 'static,
    {
        self.with_handler(Arc::new(FnHandler::new(handler)))
    }

    /// Bind a closure taking its positional arguments as one typed value.
    pub fn handle_typed<F, T, R>(self, handler: F) -> Declaration<K>
    where
        F: Fn(T) -> Result<R> + Send + Sync + 'static,
        T: DeserializeOwned + 'static,
        R: Serialize + 'static,
    {
        self.with_handler(Arc::new(TypedHandler::new(handler)))
    }

    /// Bind an existing handler.
    pub fn with_handler(self, handler: Arc<dyn Handler>) -> Declaration<K> {
        Declaration::Case {
            handler,
            values: self.values,
        }
    }
}

/// Start a case declaration matching `values`.
///
/// # Errors
///
/// `MalformedDeclaration` when `values` is empty. An empty case is never
/// treated as a default; use [`default`] for that.
pub fn case<K, I>(values: I) -> Result<CaseDecl<K>>
where
    I: IntoIterator,
    I::Item: Into<K>,
{
    let values: Vec<K> = values.into_iter().map(Into::into).collect();
    if values.is_empty() {
        return Err(SwitchError::MalformedDeclaration);
    }
    Ok(CaseDecl { values })
}

/// Declare the default handler from a closure that reads its own arguments.
pub fn default<K, F, R>(handler: F) -> Declaration<K>
where
    F: Fn(&CallArgs) -> Result<R> + Send + Sync + 'static,
    R: Serialize + 'static,
{
    default_with(Arc::new(FnHandler::new(handler)))
}

/// Declare the default handler from a typed closure.
pub fn default_typed<K, F, T, R>(handler: F) -> Declaration<K>
where
    F: Fn(T) -> Result<R> + Send + Sync + 'static,
    T: DeserializeOwned + 'static,
    R: Serialize + 'static,
{
    default_with(Arc::new(TypedHandler::new(handler)))
}

/// Declare an existing handler as the default.
pub fn default_with<K>(handler: Arc<dyn Handler>) -> Declaration<K> {
    Declaration::Default { handler }
}

/// Declare an opaque attribute.
pub fn attribute<K>(value: impl Into<Value>) -> Declaration<K> {
    Declaration::Attribute(value.into())
}
