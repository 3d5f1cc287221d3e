//! JSON value codec using `serde_json`.
//!
//! Handler arguments, handler results and switch attributes all travel as
//! [`serde_json::Value`]. This codec converts between those values and
//! concrete Rust types.
//!
//! # Example
//!
//! ```
//! use switchcase::codec::JsonCodec;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Command {
//!     name: String,
//!     repeat: u32,
//! }
//!
//! let cmd = Command { name: "play".to_string(), repeat: 2 };
//! let value = JsonCodec::encode(&cmd).unwrap();
//! let decoded: Command = JsonCodec::decode(value).unwrap();
//! assert_eq!(decoded, cmd);
//! ```

use serde_json::Value;

use crate::error::Result;

/// Codec between Rust values and [`serde_json::Value`].
pub struct JsonCodec;

impl JsonCodec {
    /// Encode a value into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be serialized (e.g. a map with
    /// non-string keys).
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<Value> {
        Ok(serde_json::to_value(value)?)
    }

    /// Decode an owned JSON value into `T`.
    ///
    /// # Errors
    ///
    /// Returns error if the value does not have the shape of `T`.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a borrowed JSON value into `T`, cloning it first.
    #[inline]
    pub fn decode_ref<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T> {
        Self::decode(value.clone())
    }
}
