//! Binding collector - folds declaration entries into a switch.
//!
//! Entries are consumed strictly in order and every invariant is checked at
//! the entry that violates it, so construction fails fast and no partially
//! built table ever escapes.
//!
//! # Example
//!
//! ```
//! use switchcase::collector::build;
//! use switchcase::declare::{case, default, Entry};
//! use switchcase::{CallArgs, SwitchConfig};
//!
//! let entries: Vec<Entry<String>> = vec![
//!     Entry::new("_", case(["play"])?.handle(|_: &CallArgs| Ok("play"))),
//!     Entry::new("_", default(|_: &CallArgs| Ok("default"))),
//! ];
//!
//! let switch = build(entries, &SwitchConfig::default())?;
//! assert_eq!(switch.switch("play", &CallArgs::new())?.into_value(), "play");
//! # Ok::<(), switchcase::SwitchError>(())
//! ```

use std::collections::hash_map;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use serde_json::Map;

use crate::config::{SwitchConfig, RESERVED_NAME};
use crate::declare::{is_public_name, Declaration, Entry};
use crate::error::{Result, SwitchError};
use crate::handler::{Handler, HandlerRegistry};
use crate::switch::Switch;
use crate::table::DispatchTable;

/// Build a switch from an ordered sequence of entries.
///
/// # Errors
///
/// - `MalformedDeclaration` - a case with no match values
/// - `ReservedName` - a binding named [`RESERVED_NAME`]
/// - `DuplicateDefault` - a second default declaration
/// - `DuplicateCaseValue` - a value bound twice with duplicates disallowed
pub fn build<K, I>(entries: I, config: &SwitchConfig) -> Result<Switch<K>>
where
    K: Eq + Hash + Debug,
    I: IntoIterator<Item = Entry<K>>,
{
    let mut table = DispatchTable::new(config.allow_duplicates);
    let mut attributes = Map::new();
    let mut handlers = HandlerRegistry::new();

    for entry in entries {
        let Entry { name, declaration } = entry;

        let handler = match declaration {
            Declaration::Attribute(value) => {
                attributes.insert(name, value);
                continue;
            }
            Declaration::Case { handler, values } => {
                if values.is_empty() {
                    tracing::debug!("Rejected case '{}': no match values", name);
                    return Err(SwitchError::MalformedDeclaration);
                }
                check_name(&name)?;
                bind_values(&mut table, &name, &handler, values)?;
                handler
            }
            Declaration::Default { handler } => {
                check_name(&name)?;
                if table.default.is_some() {
                    tracing::debug!("Rejected default '{}': default already declared", name);
                    return Err(SwitchError::DuplicateDefault);
                }
                table.default = Some(handler.clone());
                handler
            }
        };

        if is_public_name(&name) {
            if handlers.register_shared(&name, handler).is_some() {
                tracing::warn!("Handler name '{}' declared twice, keeping the later one", name);
            }
        }
    }

    tracing::debug!(
        "Built switch: {} case values, default: {}, allow_duplicates: {}, named handlers: {}",
        table.len(),
        table.has_default(),
        table.allow_duplicates(),
        handlers.len()
    );

    Ok(Switch::from_parts(table, attributes, handlers))
}

/// Build only the dispatch table, discarding attributes and named handlers.
pub fn build_table<K, I>(entries: I, config: &SwitchConfig) -> Result<DispatchTable<K>>
where
    K: Eq + Hash + Debug,
    I: IntoIterator<Item = Entry<K>>,
{
    build(entries, config).map(Switch::into_table)
}

fn check_name(name: &str) -> Result<()> {
    if name == RESERVED_NAME {
        tracing::debug!("Rejected binding under reserved name '{}'", name);
        return Err(SwitchError::ReservedName(name.to_string()));
    }
    Ok(())
}

fn bind_values<K>(
    table: &mut DispatchTable<K>,
    name: &str,
    handler: &Arc<dyn Handler>,
    values: Vec<K>,
) -> Result<()>
where
    K: Eq + Hash + Debug,
{
    for value in values {
        match table.bindings.entry(value) {
            hash_map::Entry::Vacant(slot) => {
                slot.insert(vec![handler.clone()]);
            }
            hash_map::Entry::Occupied(mut slot) => {
                if !table.allow_duplicates {
                    let shown = format!("{:?}", slot.key());
                    tracing::debug!("Rejected case '{}': value {} already bound", name, shown);
                    return Err(SwitchError::DuplicateCaseValue(shown));
                }
                slot.get_mut().push(handler.clone());
            }
        }
    }
    Ok(())
}
