//! Construction policy for dispatch tables.

use serde::{Deserialize, Serialize};

/// Name reserved for the resolver entry point ([`crate::Switch::switch`]).
///
/// No binding may be declared under this name.
pub const RESERVED_NAME: &str = "switch";

/// Default duplicate policy: a case value may be bound only once.
pub const DEFAULT_ALLOW_DUPLICATES: bool = false;

/// Configuration applied while building a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchConfig {
    /// Allow a case value to be bound by more than one declaration
    /// (multi-bind). Also selects the result shape: with duplicates
    /// allowed every resolution yields a list of results.
    pub allow_duplicates: bool,
}

impl SwitchConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with multi-bind enabled.
    pub fn with_duplicates() -> Self {
        Self {
            allow_duplicates: true,
        }
    }
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            allow_duplicates: DEFAULT_ALLOW_DUPLICATES,
        }
    }
}
