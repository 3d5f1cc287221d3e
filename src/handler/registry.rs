//! Handler trait, closure adapters and the named-handler registry.
//!
//! Every handler takes [`CallArgs`] and yields a JSON value. Closures are
//! adapted through [`FnHandler`] (raw access to the arguments) or
//! [`TypedHandler`] (positional arguments decoded into one typed value).
//!
//! The [`HandlerRegistry`] maps public names to handlers so a case handler
//! can also be invoked directly, bypassing dispatch.
//!
//! # Example
//!
//! ```
//! use switchcase::handler::{FnHandler, HandlerRegistry, TypedHandler};
//! use switchcase::CallArgs;
//!
//! let mut registry = HandlerRegistry::new();
//!
//! registry.register("greet", FnHandler::new(|args: &CallArgs| {
//!     let name: String = args.kwarg("name")?;
//!     Ok(format!("hello {}", name))
//! }));
//! registry.register("double", TypedHandler::new(|n: i64| Ok(n * 2)));
//!
//! let value = registry.call("double", &CallArgs::new().with_arg(21)).unwrap();
//! assert_eq!(value, 42);
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::CallArgs;
use crate::codec::JsonCodec;
use crate::error::{Result, SwitchError};

/// Result type for handler functions.
pub type HandlerResult = Result<Value>;

/// Trait for handler functions.
pub trait Handler: Send + Sync + 'static {
    /// Invoke the handler with the given arguments.
    fn call(&self, args: &CallArgs) -> HandlerResult;
}

/// Wrapper for closures that read their own arguments from [`CallArgs`].
pub struct FnHandler<F, R>
where
    F: Fn(&CallArgs) -> Result<R> + Send + Sync + 'static,
    R: Serialize + 'static,
{
    handler: F,
    _phantom: PhantomData<fn() -> R>,
}

impl<F, R> FnHandler<F, R>
where
    F: Fn(&CallArgs) -> Result<R> + Send + Sync + 'static,
    R: Serialize + 'static,
{
    /// Create a new closure handler.
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            _phantom: PhantomData,
        }
    }
}

impl<F, R> Handler for FnHandler<F, R>
where
    F: Fn(&CallArgs) -> Result<R> + Send + Sync + 'static,
    R: Serialize + 'static,
{
    fn call(&self, args: &CallArgs) -> HandlerResult {
        let output = (self.handler)(args)?;
        JsonCodec::encode(&output)
    }
}

/// Wrapper that decodes positional arguments before calling the handler.
///
/// See [`CallArgs::decode_positional`] for how arguments map onto `T`.
/// Keyword arguments are not visible to typed handlers.
pub struct TypedHandler<F, T, R>
where
    F: Fn(T) -> Result<R> + Send + Sync + 'static,
    T: DeserializeOwned + 'static,
    R: Serialize + 'static,
{
    handler: F,
    _phantom: PhantomData<fn(T) -> R>,
}

impl<F, T, R> TypedHandler<F, T, R>
where
    F: Fn(T) -> Result<R> + Send + Sync + 'static,
    T: DeserializeOwned + 'static,
    R: Serialize + 'static,
{
    /// Create a new typed handler.
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            _phantom: PhantomData,
        }
    }
}

impl<F, T, R> Handler for TypedHandler<F, T, R>
where
    F: Fn(T) -> Result<R> + Send + Sync + 'static,
    T: DeserializeOwned + 'static,
    R: Serialize + 'static,
{
    fn call(&self, args: &CallArgs) -> HandlerResult {
        let parsed: T = args.decode_positional()?;
        let output = (self.handler)(parsed)?;
        JsonCodec::encode(&output)
    }
}

/// Registry mapping public names to directly callable handlers.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    /// Handlers by name.
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `name`.
    ///
    /// Returns the handler previously registered under that name, if any.
    pub fn register<H: Handler>(&mut self, name: &str, handler: H) -> Option<Arc<dyn Handler>> {
        self.register_shared(name, Arc::new(handler))
    }

    /// Register an already shared handler under `name`.
    pub fn register_shared(
        &mut self,
        name: &str,
        handler: Arc<dyn Handler>,
    ) -> Option<Arc<dyn Handler>> {
        self.handlers.insert(name.to_string(), handler)
    }

    /// Get a handler by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Handler>> {
        self.handlers.get(name)
    }

    /// Check whether a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke the handler registered under `name`.
    ///
    /// # Errors
    ///
    /// `UnknownHandler` if nothing is registered under `name`; otherwise
    /// whatever the handler returns.
    pub fn call(&self, name: &str, args: &CallArgs) -> HandlerResult {
        let handler = self
            .get(name)
            .ok_or_else(|| SwitchError::UnknownHandler(name.to_string()))?;

        handler.call(args)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("names", &self.names())
            .finish()
    }
}
