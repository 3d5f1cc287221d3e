//! Dispatch resolver - selects and invokes handlers for a query value.
//!
//! Resolution is a pure read over the table. Handlers bound to the query run
//! in declaration order with the same arguments; when nothing is bound the
//! default runs instead. A handler error stops the remaining handlers and is
//! returned unchanged.
//!
//! # Result shape
//!
//! With duplicates allowed every resolution returns [`Outcome::Multiple`],
//! even when only one handler ran. Without duplicates at most one handler can
//! match, so the result is [`Outcome::Single`].

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use serde_json::Value;

use crate::codec::JsonCodec;
use crate::collector;
use crate::config::SwitchConfig;
use crate::declare::Entry;
use crate::error::{Result, SwitchError};
use crate::handler::{CallArgs, Handler};
use crate::switch::Switch;
use crate::table::DispatchTable;

/// Combined result of one resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Return value of the single matching handler.
    Single(Value),
    /// Return values of every invoked handler, in invocation order.
    Multiple(Vec<Value>),
}

impl Outcome {
    /// Number of handler results.
    pub fn len(&self) -> usize {
        match self {
            Outcome::Single(_) => 1,
            Outcome::Multiple(values) => values.len(),
        }
    }

    /// True only for an empty `Multiple`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the results as a slice.
    pub fn values(&self) -> &[Value] {
        match self {
            Outcome::Single(value) => std::slice::from_ref(value),
            Outcome::Multiple(values) => values,
        }
    }

    /// Take the results as a vector.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Outcome::Single(value) => vec![value],
            Outcome::Multiple(values) => values,
        }
    }

    /// Collapse into one JSON value: `Single` unwrapped, `Multiple` as an array.
    pub fn into_value(self) -> Value {
        match self {
            Outcome::Single(value) => value,
            Outcome::Multiple(values) => Value::Array(values),
        }
    }

    /// Decode [`Outcome::into_value`] into `T`.
    pub fn decode<T: serde::de::DeserializeOwned>(self) -> Result<T> {
        JsonCodec::decode(self.into_value())
    }
}

/// Resolve `query` against `table`, invoking the matching handlers.
///
/// # Errors
///
/// `NoMatch` when `query` is unbound and there is no default. Any handler
/// error is returned as-is.
pub fn resolve<K, Q>(table: &DispatchTable<K>, query: &Q, args: &CallArgs) -> Result<Outcome>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + Debug + ?Sized,
{
    let handlers: &[Arc<dyn Handler>] = match table.handlers(query) {
        Some(handlers) => {
            tracing::trace!("Case {:?} matched {} handler(s)", query, handlers.len());
            handlers
        }
        None => match table.default_handler() {
            Some(handler) => {
                tracing::trace!("No case for {:?}, running default", query);
                std::slice::from_ref(handler)
            }
            None => {
                tracing::trace!("No case for {:?} and no default", query);
                return Err(SwitchError::NoMatch(format!("{:?}", query)));
            }
        },
    };

    match (table.allow_duplicates(), handlers) {
        (false, [handler]) => Ok(Outcome::Single(handler.call(args)?)),
        _ => {
            let values = handlers
                .iter()
                .map(|handler| handler.call(args))
                .collect::<Result<Vec<_>>>()?;
            Ok(Outcome::Multiple(values))
        }
    }
}

/// Build a switch and resolve `query` once, with `args`, right away.
///
/// # Errors
///
/// Any construction error from [`collector::build`], then any resolution
/// error from [`resolve`].
pub fn build_and_resolve<K, I, Q>(
    entries: I,
    config: &SwitchConfig,
    query: &Q,
    args: &CallArgs,
) -> Result<(Switch<K>, Outcome)>
where
    K: Eq + Hash + Debug + Borrow<Q>,
    I: IntoIterator<Item = Entry<K>>,
    Q: Eq + Hash + Debug + ?Sized,
{
    let switch = collector::build(entries, config)?;
    let outcome = resolve(switch.table(), query, args)?;
    Ok((switch, outcome))
}
