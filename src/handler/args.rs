//! Call arguments forwarded to handlers.
//!
//! [`CallArgs`] carries ordered positional arguments and named keyword
//! arguments. One `CallArgs` is shared by reference with every handler that
//! runs for a single resolution.
//!
//! # Example
//!
//! ```
//! use switchcase::CallArgs;
//!
//! let args = CallArgs::new().with_arg(99).with_kwarg("kw", "kw");
//!
//! let param: i32 = args.arg(0).unwrap();
//! let kw: String = args.kwarg("kw").unwrap();
//! let kw2: u32 = args.kwarg_or("kw2", 4).unwrap();
//!
//! assert_eq!((param, kw.as_str(), kw2), (99, "kw", 4));
//! ```

use serde_json::{Map, Value};

use crate::codec::JsonCodec;
use crate::error::{Result, SwitchError};

/// Positional and keyword arguments for a handler call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    /// Positional arguments, in call order.
    positional: Vec<Value>,
    /// Keyword arguments by name.
    keyword: Map<String, Value>,
}

impl CallArgs {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from positional arguments only.
    pub fn from_positional(positional: Vec<Value>) -> Self {
        Self {
            positional,
            keyword: Map::new(),
        }
    }

    /// Append a positional argument.
    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument, replacing any earlier value under `name`.
    pub fn with_kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    /// Append a positional argument of any serializable type.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be encoded.
    pub fn encode_arg<T: serde::Serialize>(mut self, value: &T) -> Result<Self> {
        self.positional.push(JsonCodec::encode(value)?);
        Ok(self)
    }

    /// Set a keyword argument of any serializable type.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be encoded.
    pub fn encode_kwarg<T: serde::Serialize>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        self.keyword.insert(name.into(), JsonCodec::encode(value)?);
        Ok(self)
    }

    /// Positional arguments.
    #[inline]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword arguments.
    #[inline]
    pub fn keywords(&self) -> &Map<String, Value> {
        &self.keyword
    }

    /// Raw positional argument at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Raw keyword argument `name`.
    #[inline]
    pub fn get_kwarg(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    /// Decode the positional argument at `index`.
    ///
    /// # Errors
    ///
    /// `MissingArgument` if there is no such argument, `Json` if it does not
    /// decode as `T`.
    pub fn arg<T: serde::de::DeserializeOwned>(&self, index: usize) -> Result<T> {
        let value = self
            .get(index)
            .ok_or_else(|| SwitchError::MissingArgument(format!("positional #{}", index)))?;
        JsonCodec::decode_ref(value)
    }

    /// Decode the keyword argument `name`.
    ///
    /// # Errors
    ///
    /// `MissingArgument` if the keyword was not supplied, `Json` if it does
    /// not decode as `T`.
    pub fn kwarg<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self
            .get_kwarg(name)
            .ok_or_else(|| SwitchError::MissingArgument(format!("keyword '{}'", name)))?;
        JsonCodec::decode_ref(value)
    }

    /// Decode the keyword argument `name`, or return `default` when absent.
    pub fn kwarg_or<T: serde::de::DeserializeOwned>(&self, name: &str, default: T) -> Result<T> {
        match self.get_kwarg(name) {
            Some(value) => JsonCodec::decode_ref(value),
            None => Ok(default),
        }
    }

    /// Decode all positional arguments as one value.
    ///
    /// No arguments decode from `null` (so `()` and `Option<_>` work), a
    /// single argument decodes from itself, and several arguments decode
    /// from an array (so tuples work).
    pub fn decode_positional<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        match self.positional.as_slice() {
            [] => JsonCodec::decode(Value::Null),
            [single] => JsonCodec::decode_ref(single),
            many => JsonCodec::decode(Value::Array(many.to_vec())),
        }
    }

    /// Number of positional arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// True when neither positional nor keyword arguments were supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}
