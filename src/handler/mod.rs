//! Handler module - handler adapters and direct invocation.
//!
//! Provides:
//! - [`Handler`] - the trait every case and default handler implements
//! - [`FnHandler`] / [`TypedHandler`] - closure adapters
//! - [`CallArgs`] - positional and keyword arguments passed to handlers
//! - [`HandlerRegistry`] - maps public names to directly callable handlers
//!
//! # Example
//!
//! ```
//! use switchcase::handler::{FnHandler, Handler};
//! use switchcase::CallArgs;
//!
//! let play = FnHandler::new(|args: &CallArgs| {
//!     let times: u32 = args.kwarg_or("times", 1)?;
//!     Ok(format!("play x{}", times))
//! });
//!
//! let out = play.call(&CallArgs::new().with_kwarg("times", 3)).unwrap();
//! assert_eq!(out, "play x3");
//! ```

mod args;
mod registry;

pub use args::CallArgs;
pub use registry::{FnHandler, Handler, HandlerRegistry, HandlerResult, TypedHandler};
