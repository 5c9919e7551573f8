//! # RuntimeContext: one page session's runtime state
//!
//! Everything the original design kept in ambient globals lives here
//! instead: the per-session config cache, the cache-reset registry, and
//! the resume-armed flag. The context is constructed by the page bootstrap
//! and dropped with the page; there is no cross-page state.

use crate::host::{AssetHost, NullHost};
use crate::registry::BlockRegistry;
use brix_core::config::BlockConfig;
use brix_core::element::Element;
use brix_core::error::BlockError;
use brix_core::page::Page;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cached configuration sources for one block-type name.
///
/// `None` in either slot means "confirmed absent", not "not yet checked";
/// a name that has never been requested simply has no entry.
pub(crate) struct ConfigSources {
    pub global: Option<Arc<BlockConfig>>,
    pub brand: Option<Arc<BlockConfig>>,
    /// All instances of the block type share this one merged config.
    pub merged: Option<Arc<BlockConfig>>,
}

/// A cache-reset handler bound to its element/config pair.
type BoundReset = Box<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

pub struct RuntimeContext {
    registry: Arc<BlockRegistry>,
    host: Arc<dyn AssetHost>,
    brand: Option<String>,
    theme: Option<String>,
    // Held across the fetch so concurrent requests for one block name
    // coalesce into a single underlying fetch per source.
    pub(crate) config_cache: tokio::sync::Mutex<HashMap<String, ConfigSources>>,
    reset_handlers: parking_lot::Mutex<Vec<BoundReset>>,
    resume_armed: AtomicBool,
}

impl RuntimeContext {
    pub fn new(registry: Arc<BlockRegistry>) -> Self {
        Self {
            registry,
            host: Arc::new(NullHost),
            brand: None,
            theme: None,
            config_cache: tokio::sync::Mutex::new(HashMap::new()),
            reset_handlers: parking_lot::Mutex::new(Vec::new()),
            resume_armed: AtomicBool::new(false),
        }
    }

    /// Build a context from page metadata. When the page declares a brand,
    /// the brand code is also added as a class on the page root.
    pub fn for_page(page: &Page, registry: Arc<BlockRegistry>) -> Self {
        let mut ctx = Self::new(registry);
        if let Some(brand) = page.brand() {
            page.root().add_class(brand);
            ctx.brand = Some(brand.to_string());
        }
        ctx.theme = page.theme().map(str::to_string);
        ctx
    }

    pub fn with_host(mut self, host: Arc<dyn AssetHost>) -> Self {
        self.host = host;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn host(&self) -> &dyn AssetHost {
        self.host.as_ref()
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Bind each of `config`'s cache-reset handlers to `element` and append
    /// them to the session registry, arming the resume path on first use.
    pub fn register_cache_resets(&self, element: &Arc<Element>, config: &Arc<BlockConfig>) {
        if config.cache_reset_handlers.is_empty() {
            return;
        }
        let mut handlers = self.reset_handlers.lock();
        for handler in &config.cache_reset_handlers {
            let handler = Arc::clone(handler);
            let element = Arc::clone(element);
            let config = Arc::clone(config);
            handlers.push(Box::new(move || handler(&element, &config)));
        }
        self.resume_armed.store(true, Ordering::Release);
    }

    /// Number of bound reset handlers currently registered.
    pub fn reset_handler_count(&self) -> usize {
        self.reset_handlers.lock().len()
    }

    /// Entry point for the host's restore signal ("page shown again").
    ///
    /// `persisted` distinguishes a history-cache restore from a fresh
    /// navigation; only the persisted case fires handlers. Handlers run
    /// synchronously in registration order. A failing handler is logged
    /// and the remaining handlers still run; the inherited design let one
    /// failure abort the rest, and that short-circuit is deliberately not
    /// reproduced here.
    pub fn on_resume(&self, persisted: bool) {
        if !persisted || !self.resume_armed.load(Ordering::Acquire) {
            return;
        }
        let handlers = self.reset_handlers.lock();
        for (index, handler) in handlers.iter().enumerate() {
            if let Err(source) = handler() {
                let fault = BlockError::ResetHandler { index, source };
                tracing::debug!(error = %fault, "cache-reset handler failed");
            }
        }
    }
}

impl std::fmt::Debug for RuntimeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeContext")
            .field("brand", &self.brand)
            .field("theme", &self.theme)
            .field("registry", &self.registry)
            .field("reset_handlers", &self.reset_handler_count())
            .finish()
    }
}
