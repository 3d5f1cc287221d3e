//! Switch artifact and its fluent builder.
//!
//! The [`SwitchBuilder`] records declarations in order, the way a switch
//! body reads top to bottom. [`SwitchBuilder::build`] hands them to the
//! binding collector. The resulting [`Switch`] owns:
//! 1. the immutable dispatch table
//! 2. the opaque attributes declared alongside the cases
//! 3. the named handlers, callable directly by name
//!
//! # Example
//!
//! ```
//! use switchcase::{CallArgs, Switch};
//!
//! let commands = Switch::<String>::builder()
//!     .case("_", ["play"], |_: &CallArgs| Ok("play command"))
//!     .case("_", ["back"], |_: &CallArgs| Ok("back command"))
//!     .case("quit", ["exit", "quit"], |_: &CallArgs| Ok("exit or quit command"))
//!     .default_case("_", |_: &CallArgs| Ok("default case"))
//!     .build()?;
//!
//! let value = commands.switch("exit", &CallArgs::new())?;
//! assert_eq!(value.into_value(), "exit or quit command");
//!
//! // Named handlers bypass dispatch.
//! assert_eq!(commands.call("quit", &CallArgs::new())?, "exit or quit command");
//! # Ok::<(), switchcase::SwitchError>(())
//! ```

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::collector;
use crate::config::SwitchConfig;
use crate::declare::{Declaration, Entry};
use crate::error::Result;
use crate::handler::{CallArgs, FnHandler, Handler, HandlerRegistry, HandlerResult, TypedHandler};
use crate::resolver::{self, Outcome};
use crate::table::DispatchTable;

/// Builder for declaring and creating a switch.
///
/// Declarations are only validated by [`SwitchBuilder::build`], in the
/// order they were added.
pub struct SwitchBuilder<K> {
    entries: Vec<Entry<K>>,
    config: SwitchConfig,
}

impl<K> SwitchBuilder<K>
where
    K: Eq + Hash + Debug,
{
    /// Create a new switch builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            config: SwitchConfig::default(),
        }
    }

    /// Declare a case handler that reads its own arguments.
    ///
    /// Use `"_"` as the name for handlers that should not be callable by
    /// name. An empty `values` list is rejected at build time.
    pub fn case<V, F, R>(self, name: &str, values: V, handler: F) -> Self
    where
        V: IntoIterator,
        V::Item: Into<K>,
        F: Fn(&CallArgs) -> Result<R> + Send + Sync + 'static,
        R: Serialize + 'static,
    {
        self.case_with(name, values, Arc::new(FnHandler::new(handler)))
    }

    /// Declare a case handler taking its positional arguments as one typed value.
    pub fn case_typed<V, F, T, R>(self, name: &str, values: V, handler: F) -> Self
    where
        V: IntoIterator,
        V::Item: Into<K>,
        F: Fn(T) -> Result<R> + Send + Sync + 'static,
        T: DeserializeOwned + 'static,
        R: Serialize + 'static,
    {
        self.case_with(name, values, Arc::new(TypedHandler::new(handler)))
    }

    /// Declare an existing handler as a case.
    pub fn case_with<V>(self, name: &str, values: V, handler: Arc<dyn Handler>) -> Self
    where
        V: IntoIterator,
        V::Item: Into<K>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.entry(Entry::new(name, Declaration::Case { handler, values }))
    }

    /// Declare the default handler.
    pub fn default_case<F, R>(self, name: &str, handler: F) -> Self
    where
        F: Fn(&CallArgs) -> Result<R> + Send + Sync + 'static,
        R: Serialize + 'static,
    {
        self.default_with(name, Arc::new(FnHandler::new(handler)))
    }

    /// Declare the default handler from a typed closure.
    pub fn default_case_typed<F, T, R>(self, name: &str, handler: F) -> Self
    where
        F: Fn(T) -> Result<R> + Send + Sync + 'static,
        T: DeserializeOwned + 'static,
        R: Serialize + 'static,
    {
        self.default_with(name, Arc::new(TypedHandler::new(handler)))
    }

    /// Declare an existing handler as the default.
    pub fn default_with(self, name: &str, handler: Arc<dyn Handler>) -> Self {
        self.entry(Entry::new(name, Declaration::Default { handler }))
    }

    /// Declare an opaque attribute.
    pub fn attr(self, name: &str, value: impl Into<Value>) -> Self {
        self.entry(Entry::new(name, Declaration::Attribute(value.into())))
    }

    /// Append a prepared entry.
    pub fn entry(mut self, entry: Entry<K>) -> Self {
        self.entries.push(entry);
        self
    }

    /// Allow or forbid binding a value in more than one case.
    ///
    /// Default: false
    pub fn allow_duplicates(mut self, allow: bool) -> Self {
        self.config.allow_duplicates = allow;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SwitchConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the declarations and build the switch.
    pub fn build(self) -> Result<Switch<K>> {
        collector::build(self.entries, &self.config)
    }

    /// Build the switch and resolve `query` once, with no arguments.
    pub fn build_on<Q>(self, query: &Q) -> Result<(Switch<K>, Outcome)>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + Debug + ?Sized,
    {
        resolver::build_and_resolve(self.entries, &self.config, query, &CallArgs::new())
    }
}

impl<K> Default for SwitchBuilder<K>
where
    K: Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A built switch.
///
/// Immutable apart from its attributes, and safe to share between threads
/// when `K` is.
pub struct Switch<K> {
    /// Dispatch table.
    table: DispatchTable<K>,
    /// Opaque attributes, by name.
    attributes: Map<String, Value>,
    /// Handlers callable by name.
    handlers: HandlerRegistry,
}

impl<K> Switch<K> {
    pub(crate) fn from_parts(
        table: DispatchTable<K>,
        attributes: Map<String, Value>,
        handlers: HandlerRegistry,
    ) -> Self {
        Self {
            table,
            attributes,
            handlers,
        }
    }

    /// The dispatch table.
    pub fn table(&self) -> &DispatchTable<K> {
        &self.table
    }

    /// Consume the switch, keeping only the table.
    pub fn into_table(self) -> DispatchTable<K> {
        self.table
    }

    /// Invoke the handler declared under `name`, bypassing dispatch.
    ///
    /// # Errors
    ///
    /// `UnknownHandler` for names that were not public bindings.
    pub fn call(&self, name: &str, args: &CallArgs) -> HandlerResult {
        self.handlers.call(name, args)
    }

    /// Names of the directly callable handlers, sorted.
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.names()
    }

    /// Get an attribute.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute, returning the previous value.
    ///
    /// Attributes are not part of dispatch, so this never affects the table.
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.to_string(), value.into())
    }

    /// All attributes.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

impl<K: Eq + Hash> Switch<K> {
    /// Create a new switch builder.
    pub fn builder() -> SwitchBuilder<K>
    where
        K: Debug,
    {
        SwitchBuilder::new()
    }

    /// Resolve `query`, invoking the matching handlers with `args`.
    ///
    /// See [`resolver::resolve`].
    pub fn switch<Q>(&self, query: &Q, args: &CallArgs) -> Result<Outcome>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + Debug + ?Sized,
    {
        resolver::resolve(&self.table, query, args)
    }

    /// Whether multi-bind was allowed at construction.
    pub fn allow_duplicates(&self) -> bool {
        self.table.allow_duplicates()
    }
}

impl<K: Debug> Debug for Switch<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Switch")
            .field("table", &self.table)
            .field("attributes", &self.attributes)
            .field("handlers", &self.handlers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwitchError;
    use serde_json::json;

    #[test]
    fn test_builder_creation() {
        let builder: SwitchBuilder<String> = SwitchBuilder::new();
        assert!(builder.entries.is_empty());
        assert!(!builder.config.allow_duplicates);

        let builder: SwitchBuilder<i32> = SwitchBuilder::default();
        assert!(builder.entries.is_empty());
    }

    #[test]
    fn test_builder_method_chaining() {
        let builder = Switch::<String>::builder()
            .case("_", ["egg"], |_: &CallArgs| Ok("egg"))
            .case_typed("typed", ["salad"], |_: ()| Ok("salad"))
            .default_case("_", |_: &CallArgs| Ok("default"))
            .attr("x", json!([1, 2, 3]))
            .allow_duplicates(true);

        assert_eq!(builder.entries.len(), 4);
        assert!(builder.config.allow_duplicates);

        let switch = builder.build().unwrap();
        assert_eq!(switch.handler_names(), vec!["typed"]);
        assert_eq!(switch.attr("x"), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn test_builder_config() {
        let builder = Switch::<i32>::builder().config(SwitchConfig::with_duplicates());
        assert!(builder.config.allow_duplicates);

        let switch = builder.build().unwrap();
        assert!(switch.allow_duplicates());
        assert!(switch.table().is_empty());
    }

    #[test]
    fn test_empty_case_rejected_at_build() {
        let result = Switch::<String>::builder()
            .case("_", Vec::<&str>::new(), |_: &CallArgs| Ok(()))
            .build();

        assert!(matches!(result, Err(SwitchError::MalformedDeclaration)));
    }

    #[test]
    fn test_switch_and_direct_call() {
        let switch = Switch::<i64>::builder()
            .case("double", [2i64], |args: &CallArgs| Ok(args.arg::<i64>(0)? * 2))
            .build()
            .unwrap();

        let args = CallArgs::new().with_arg(21);
        assert_eq!(switch.switch(&2i64, &args).unwrap(), Outcome::Single(json!(42)));
        assert_eq!(switch.call("double", &args).unwrap(), json!(42));
        assert!(matches!(
            switch.call("triple", &args),
            Err(SwitchError::UnknownHandler(_))
        ));
    }

    #[test]
    fn test_set_attr_after_build() {
        let mut switch = Switch::<String>::builder()
            .case("_", ["x"], |_: &CallArgs| Ok(()))
            .attr("x", json!([1, 2, 3]))
            .build()
            .unwrap();

        assert!(switch.set_attr("y", json!([4, 5, 6])).is_none());
        assert_eq!(switch.attr("x"), Some(&json!([1, 2, 3])));
        assert_eq!(switch.attr("y"), Some(&json!([4, 5, 6])));
        assert_eq!(switch.attributes().len(), 2);
        assert_eq!(switch.table().len(), 1);
    }

    #[test]
    fn test_build_on_resolves_initial_value() {
        let (switch, outcome) = Switch::<String>::builder()
            .allow_duplicates(true)
            .case("_", ["egg"], |_: &CallArgs| Ok("egg"))
            .case("_", ["salad"], |_: &CallArgs| Ok("salad"))
            .build_on("salad")
            .unwrap();

        assert_eq!(outcome, Outcome::Multiple(vec![json!("salad")]));
        assert_eq!(
            switch.switch("egg", &CallArgs::new()).unwrap(),
            Outcome::Multiple(vec![json!("egg")])
        );
    }

    #[test]
    fn test_switch_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Switch<String>>();
        assert_send_sync::<DispatchTable<i32>>();
    }

    #[test]
    fn test_debug_output() {
        let switch = Switch::<i32>::builder()
            .case("named", [1], |_: &CallArgs| Ok(()))
            .build()
            .unwrap();

        let debug = format!("{:?}", switch);
        assert!(debug.contains("DispatchTable"));
        assert!(debug.contains("named"));
    }
}
