//! # Config locator
//!
//! Resolves a block type's global and brand configuration sources through
//! the registry, fetches both concurrently, merges them, and memoizes the
//! result for the rest of the page session. Absence of either source is a
//! normal outcome; a loader that fails is logged at debug level and
//! treated identically to "source absent".

use crate::context::{ConfigSources, RuntimeContext};
use crate::registry::ConfigLoader;
use brix_core::config::BlockConfig;
use brix_core::error::{BlockError, ConfigScope};
use brix_core::merge::merge;
use std::sync::Arc;

/// Load the merged configuration for a block type, or `None` when neither
/// a global nor a brand source exists.
///
/// Repeated calls for the same name hit the session cache and perform no
/// further fetches; the cache also remembers confirmed absence.
pub async fn load_block_config(ctx: &RuntimeContext, block: &str) -> Option<Arc<BlockConfig>> {
    let mut cache = ctx.config_cache.lock().await;
    if let Some(sources) = cache.get(block) {
        return sources.merged.clone();
    }

    let global_loader = ctx.registry().global_loader(block);
    let brand_loader = ctx
        .brand()
        .and_then(|brand| ctx.registry().brand_loader(brand, block));

    // No relative ordering between the two fetches; only the merge is
    // ordering-sensitive.
    let (global, brand) = tokio::join!(
        fetch_source(block, ConfigScope::Global, global_loader),
        fetch_source(block, ConfigScope::Brand, brand_loader),
    );

    let merged = merge(global.clone(), brand.clone());
    cache.insert(
        block.to_string(),
        ConfigSources {
            global,
            brand,
            merged: merged.clone(),
        },
    );
    merged
}

async fn fetch_source(
    block: &str,
    scope: ConfigScope,
    loader: Option<ConfigLoader>,
) -> Option<Arc<BlockConfig>> {
    let loader = loader?;
    match loader().await {
        Ok(config) => Some(Arc::new(config)),
        Err(source) => {
            let fault = BlockError::ConfigLoad {
                block: block.to_string(),
                scope,
                source,
            };
            tracing::debug!(error = %fault, "config source treated as absent");
            None
        }
    }
}
