//! Codec module - conversion between Rust values and JSON values.
//!
//! - [`JsonCodec`] - `serde_json` based encode/decode
//!
//! # Design
//!
//! The codec is a marker struct with static methods rather than a trait
//! object. Arguments, results and attributes share one dynamic value model
//! ([`serde_json::Value`]) so that heterogeneous handlers can live in one
//! dispatch table.
//!
//! # Example
//!
//! ```
//! use switchcase::codec::JsonCodec;
//!
//! let encoded = JsonCodec::encode(&"hello").unwrap();
//! let decoded: String = JsonCodec::decode(encoded).unwrap();
//! assert_eq!(decoded, "hello");
//! ```

mod json;

pub use json::JsonCodec;
