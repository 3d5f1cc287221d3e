//! Command switch - dispatching text commands to handlers.
//!
//! This example demonstrates:
//! - Declaring cases, a multi-bind case and a default with the builder
//! - Passing positional and keyword arguments to every matching handler
//! - Calling a named case handler directly
//!
//! # Running
//!
//! ```text
//! cargo run --example commands -- back
//! ```

use serde::Serialize;
use switchcase::{CallArgs, Switch};

/// Output structure for command handlers.
#[derive(Serialize, Debug)]
struct Reply {
    command: &'static str,
    speed: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let commands = Switch::<String>::builder()
        .allow_duplicates(true)
        .case("_", ["play"], |args: &CallArgs| {
            Ok(Reply {
                command: "play",
                speed: args.kwarg_or("speed", 1)?,
            })
        })
        .case("_", ["back"], |_: &CallArgs| Ok("seeking back"))
        .case("_", ["forward"], |_: &CallArgs| Ok("seeking forward"))
        // Runs alongside "back" and "forward"
        .case("seek", ["back", "forward"], |args: &CallArgs| {
            let step: i64 = args.arg(0)?;
            Ok(format!("moved by {}", step))
        })
        .default_case("_", |_: &CallArgs| Ok("unknown command"))
        .attr("version", 1)
        .build()?;

    let command = std::env::args().nth(1).unwrap_or_else(|| "back".to_string());
    let args = CallArgs::new().with_arg(10).with_kwarg("speed", 2);

    let outcome = commands.switch(command.as_str(), &args)?;
    for value in outcome.values() {
        println!("{}", value);
    }

    // Named handlers bypass dispatch.
    println!("{}", commands.call("seek", &CallArgs::new().with_arg(-5))?);

    Ok(())
}
