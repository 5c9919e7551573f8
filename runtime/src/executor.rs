//! # Lifecycle executor
//!
//! Runs a block's `beforeDecorate`, `decorate`, and `afterDecorate` hooks
//! strictly in sequence, awaiting each. The contract is best-effort: the
//! first failing hook is logged at debug level and the remaining hooks are
//! skipped, but nothing propagates to the caller. Partial decoration beats
//! aborting the page render.

use brix_core::config::{BlockConfig, HookKind};
use brix_core::element::Element;
use brix_core::error::BlockError;
use std::sync::Arc;

const HOOK_ORDER: [HookKind; 3] = [
    HookKind::BeforeDecorate,
    HookKind::Decorate,
    HookKind::AfterDecorate,
];

/// Execute the lifecycle hooks of one block instance.
pub async fn execute_decorations(element: &Arc<Element>, config: &Arc<BlockConfig>) {
    for kind in HOOK_ORDER {
        let Some(hook) = config.decorations.get(kind) else {
            continue;
        };
        if let Err(source) = hook(Arc::clone(element), Arc::clone(config)).await {
            let fault = BlockError::Hook {
                block: element.block_name().unwrap_or_default(),
                hook: kind,
                source,
            };
            tracing::debug!(error = %fault, "skipping remaining lifecycle hooks");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brix_core::config::{hook, sync_hook};
    use brix_core::element::build_block;
    use parking_lot::Mutex;

    fn recording_hook(log: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> brix_core::HookFn {
        let log = Arc::clone(log);
        sync_hook(move |_, _| {
            log.lock().push(tag);
            Ok(())
        })
    }

    #[tokio::test]
    async fn test_hooks_run_in_lifecycle_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let config = Arc::new(
            BlockConfig::new()
                .after_decorate(recording_hook(&log, "after"))
                .decorate(recording_hook(&log, "decorate"))
                .before_decorate(recording_hook(&log, "before")),
        );

        execute_decorations(&build_block("cards"), &config).await;
        assert_eq!(*log.lock(), vec!["before", "decorate", "after"]);
    }

    #[tokio::test]
    async fn test_missing_hooks_are_skipped() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let config = Arc::new(BlockConfig::new().after_decorate(recording_hook(&log, "after")));

        execute_decorations(&build_block("quote"), &config).await;
        assert_eq!(*log.lock(), vec!["after"]);
    }

    #[tokio::test]
    async fn test_failing_hook_stops_the_sequence() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let config = Arc::new(
            BlockConfig::new()
                .before_decorate(recording_hook(&log, "before"))
                .decorate(sync_hook(|_, _| anyhow::bail!("decorate blew up")))
                .after_decorate(recording_hook(&log, "after")),
        );

        // No panic, no propagation; afterDecorate never runs.
        execute_decorations(&build_block("hero"), &config).await;
        assert_eq!(*log.lock(), vec!["before"]);
    }

    #[tokio::test]
    async fn test_async_hooks_are_awaited_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let slow_log = Arc::clone(&log);
        let config = Arc::new(
            BlockConfig::new()
                .decorate(hook(move |_, _| {
                    let log = Arc::clone(&slow_log);
                    async move {
                        tokio::task::yield_now().await;
                        log.lock().push("decorate");
                        Ok(())
                    }
                }))
                .after_decorate(recording_hook(&log, "after")),
        );

        execute_decorations(&build_block("carousel"), &config).await;
        assert_eq!(*log.lock(), vec!["decorate", "after"]);
    }

    #[tokio::test]
    async fn test_hooks_receive_element_and_merged_config() {
        let config = Arc::new(
            BlockConfig::new()
                .flag("cardStyle", "rounded")
                .decorate(sync_hook(|element, config| {
                    if config.flag_value("cardStyle").is_some() {
                        element.add_class("rounded");
                    }
                    Ok(())
                })),
        );
        let block = build_block("cards");

        execute_decorations(&block, &config).await;
        assert!(block.has_class("rounded"));
    }
}
