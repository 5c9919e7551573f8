//! # Block and section loader
//!
//! Drives initialization order for a page: sections load one at a time in
//! document order, and within a section each block is awaited fully before
//! the next starts, so the page renders stably top to bottom. Loading one
//! block runs two tasks concurrently: the stylesheet fetch through the
//! asset host, and the decoration path (locate, merge, lifecycle,
//! variations, reset registration).

use crate::context::RuntimeContext;
use crate::dispatcher::dispatch_variations;
use crate::executor::execute_decorations;
use crate::locator::load_block_config;
use brix_core::element::{
    ATTR_SECTION_STATUS, BlockStatus, CLASS_BLOCK, CLASS_SECTION, Element, build_block,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::Instrument as _;

/// Decorate one block element from its merged configuration.
///
/// Runs the lifecycle hooks, dispatches matching variations, and registers
/// any cache-reset handlers. Returns the pending tasks of module-backed
/// variations so the caller can await or detach them. A block with no
/// configuration sources is left as raw markup.
pub async fn render_block(ctx: &RuntimeContext, element: &Arc<Element>) -> Vec<JoinHandle<()>> {
    let Some(block) = element.block_name() else {
        return Vec::new();
    };
    let Some(config) = load_block_config(ctx, &block).await else {
        return Vec::new();
    };

    execute_decorations(element, &config).await;
    let pending = dispatch_variations(ctx, element, &config);
    ctx.register_cache_resets(element, &config);
    pending
}

/// Load one block: stylesheet and decoration in parallel, then `loaded`.
///
/// Idempotent: a block already `loading` or `loaded` is a no-op, and two
/// concurrent triggers produce exactly one load.
pub async fn load_block(ctx: &RuntimeContext, element: &Arc<Element>) {
    if !element.try_begin_loading() {
        return;
    }
    let block = element.block_name().unwrap_or_default();
    let span = tracing::info_span!("block_load", brix.block = %block);
    async {
        let (stylesheet, pending) = tokio::join!(
            ctx.host().load_stylesheet(&block, ctx.brand(), ctx.theme()),
            render_block(ctx, element),
        );
        if let Err(error) = stylesheet {
            tracing::debug!(error = %error, "stylesheet failed to load");
        }
        // Module-backed variations stay detached at the page level.
        drop(pending);
        element.set_block_status(BlockStatus::Loaded);
    }
    .instrument(span)
    .await;
}

/// Load every block in a section, one at a time in document order.
pub async fn load_section(ctx: &RuntimeContext, section: &Arc<Element>) {
    let status = section.attr(ATTR_SECTION_STATUS);
    if matches!(status.as_deref(), Some("loading") | Some("loaded")) {
        return;
    }
    section.set_attr(ATTR_SECTION_STATUS, "loading");
    for block in section.descendants_with_class(CLASS_BLOCK) {
        load_block(ctx, &block).await;
    }
    section.set_attr(ATTR_SECTION_STATUS, "loaded");
}

/// Load every section under `root`, one at a time in document order.
pub async fn load_sections(ctx: &RuntimeContext, root: &Arc<Element>) {
    for section in root.descendants_with_class(CLASS_SECTION) {
        load_section(ctx, &section).await;
    }
}

/// Build a `header` block inside the given element and load it.
pub async fn load_header(ctx: &RuntimeContext, header: &Arc<Element>) -> Arc<Element> {
    let block = build_block("header");
    header.append_child(Arc::clone(&block));
    load_block(ctx, &block).await;
    block
}

/// Build a `footer` block inside the given element and load it.
pub async fn load_footer(ctx: &RuntimeContext, footer: &Arc<Element>) -> Arc<Element> {
    let block = build_block("footer");
    footer.append_child(Arc::clone(&block));
    load_block(ctx, &block).await;
    block
}
