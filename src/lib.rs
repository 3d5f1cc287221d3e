//! # switchcase
//!
//! Declarative switch/case dispatch for Rust.
//!
//! A switch is declared as an ordered list of cases, each binding a handler
//! to one or more match values, plus an optional default. Presenting a value
//! runs the matching handler(s). With duplicates allowed (multi-bind) one
//! value may match several cases, and every matching handler runs in
//! declaration order.
//!
//! ## Architecture
//!
//! - **Binding collector** ([`collector`]): validates declarations and
//!   builds an immutable [`DispatchTable`]
//! - **Dispatch resolver** ([`resolver`]): looks up a query value and
//!   invokes the handler set, falling back to the default
//!
//! ## Example
//!
//! ```
//! use switchcase::{CallArgs, Switch};
//!
//! let commands = Switch::<String>::builder()
//!     .allow_duplicates(true)
//!     .case("_", ["play"], |_: &CallArgs| Ok("play"))
//!     .case("_", ["back"], |_: &CallArgs| Ok("back"))
//!     .case("_", ["forward"], |_: &CallArgs| Ok("forward"))
//!     .case("_", ["back", "forward"], |_: &CallArgs| Ok("back or forward"))
//!     .build()?;
//!
//! let outcome = commands.switch("back", &CallArgs::new())?;
//! assert_eq!(outcome.decode::<Vec<String>>()?, ["back", "back or forward"]);
//!
//! assert!(commands.switch("nonexistent", &CallArgs::new()).is_err());
//! # Ok::<(), switchcase::SwitchError>(())
//! ```

pub mod codec;
pub mod collector;
pub mod config;
pub mod declare;
pub mod error;
pub mod handler;
pub mod resolver;

mod switch;
mod table;

pub use collector::{build, build_table};
pub use config::{SwitchConfig, RESERVED_NAME};
pub use declare::{Declaration, Entry};
pub use error::{Result, SwitchError};
pub use handler::{CallArgs, Handler};
pub use resolver::{build_and_resolve, resolve, Outcome};
pub use switch::{Switch, SwitchBuilder};
pub use table::DispatchTable;
