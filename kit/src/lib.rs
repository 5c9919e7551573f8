//! Brix facade crate.
//!
//! Re-exports the element/config model from `brix-core` and the loading
//! runtime from `brix-runtime` behind a single entry point. Page bootstrap
//! code builds a [`BlockRegistry`], derives a [`RuntimeContext`] from the
//! page, and calls [`brix_runtime::loader::load_sections`].

pub use brix_core as core;
pub use brix_runtime as runtime;

pub use brix_core::{BlockConfig, BlockStatus, Element, Page, build_block, merge};
pub use brix_runtime::{AssetHost, BlockRegistry, NullHost, RuntimeContext};

pub mod prelude {
    pub use brix_core::config::{
        Behavior, BlockConfig, Decorations, HookFn, HookKind, ResetFn, Variation, VariationFn,
        hook, reset_fn, sync_hook, variation_fn,
    };
    pub use brix_core::element::{BlockStatus, Element, build_block};
    pub use brix_core::merge::merge;
    pub use brix_core::page::Page;
    pub use brix_runtime::prelude::*;
}

/// Install a global tracing subscriber honoring `RUST_LOG`.
///
/// Recovered block faults log at debug level, so
/// `RUST_LOG=brix_runtime=debug` surfaces them during development.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
