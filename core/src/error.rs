//! Fault taxonomy for the block runtime.
//!
//! Every variant is recovered where it occurs and logged at debug level;
//! none of these ever escalate past the failing block. A failing block
//! degrades to its raw markup instead of blocking the page.

use crate::config::HookKind;
use thiserror::Error;

/// Which configuration source a load fault belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    Global,
    Brand,
}

impl std::fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigScope::Global => f.write_str("global"),
            ConfigScope::Brand => f.write_str("brand"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BlockError {
    /// A configuration source failed to resolve; treated as "source absent".
    #[error("failed to load {scope} config for block '{block}'")]
    ConfigLoad {
        block: String,
        scope: ConfigScope,
        #[source]
        source: anyhow::Error,
    },

    /// A lifecycle hook failed; remaining hooks for that block are skipped.
    #[error("lifecycle hook '{hook}' failed for block '{block}'")]
    Hook {
        block: String,
        hook: HookKind,
        #[source]
        source: anyhow::Error,
    },

    /// A deferred variation module failed to load or resolve.
    #[error("variation module '{module}' failed for block '{block}'")]
    VariationModule {
        block: String,
        module: String,
        #[source]
        source: anyhow::Error,
    },

    /// A cache-reset handler failed during a restore event.
    #[error("cache-reset handler {index} failed on resume")]
    ResetHandler {
        index: usize,
        #[source]
        source: anyhow::Error,
    },
}
