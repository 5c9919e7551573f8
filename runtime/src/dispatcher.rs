//! # Variation dispatcher
//!
//! After the lifecycle hooks finish, the merged variation list is walked
//! in order (global entries first, then brand entries). A variation fires
//! when the block element carries a class equal to its name. Inline
//! behaviors run synchronously on the dispatching task; module-backed
//! behaviors are spawned and their handles returned, so the caller decides
//! whether to await them or leave them detached.

use crate::context::RuntimeContext;
use brix_core::config::{Behavior, BlockConfig};
use brix_core::element::Element;
use brix_core::error::BlockError;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Dispatch the variations matching `element`'s classes.
///
/// Returns the pending tasks for module-backed variations. Matching
/// variations are not mutually exclusive; inline behaviors complete before
/// this function returns, spawned ones have no defined completion order
/// relative to them.
pub fn dispatch_variations(
    ctx: &RuntimeContext,
    element: &Arc<Element>,
    config: &Arc<BlockConfig>,
) -> Vec<JoinHandle<()>> {
    let block = element.block_name().unwrap_or_default();
    let mut pending = Vec::new();

    for variation in &config.variations {
        if !element.has_class(&variation.name) {
            continue;
        }
        match &variation.behavior {
            Behavior::Inline(run) => run(element, config),
            Behavior::Module(module) => {
                let Some(loader) = ctx.registry().variation_module_loader(&block, module) else {
                    tracing::debug!(
                        block = %block,
                        module = %module,
                        "no loader registered for variation module"
                    );
                    continue;
                };
                let element = Arc::clone(element);
                let config = Arc::clone(config);
                let block = block.clone();
                let module = module.clone();
                pending.push(tokio::spawn(async move {
                    match loader().await {
                        Ok(run) => run(&element, &config),
                        Err(source) => {
                            let fault = BlockError::VariationModule {
                                block,
                                module,
                                source,
                            };
                            tracing::debug!(error = %fault, "deferred variation dropped");
                        }
                    }
                }));
            }
        }
    }
    pending
}
