//! # BlockConfig: the merged configuration one block instance consumes
//!
//! A configuration carries four optional facets: free-form `flags`, up to
//! three lifecycle `decorations`, conditionally-applied `variations`, and
//! `cache_reset_handlers` fired on a history-cache restore. Configs are
//! addressed by block-type name, so every instance of a block type on a
//! page shares one merged config behind an `Arc`; after merging, nothing
//! mutates it.

use crate::element::Element;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for async boxed futures stored in hook and loader closures.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A lifecycle hook. Receives the block element and the merged config;
/// may be synchronous or suspend, and reports failure through `Result`.
pub type HookFn =
    Arc<dyn Fn(Arc<Element>, Arc<BlockConfig>) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// A variation behavior. Runs synchronously once its variation matches.
pub type VariationFn = Arc<dyn Fn(&Element, &BlockConfig) + Send + Sync>;

/// A cache-reset handler, bound to one element/config pair at registration.
pub type ResetFn = Arc<dyn Fn(&Element, &BlockConfig) -> anyhow::Result<()> + Send + Sync>;

/// The three ordered lifecycle extension points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    BeforeDecorate,
    Decorate,
    AfterDecorate,
}

impl HookKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HookKind::BeforeDecorate => "beforeDecorate",
            HookKind::Decorate => "decorate",
            HookKind::AfterDecorate => "afterDecorate",
        }
    }
}

impl std::fmt::Display for HookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The named lifecycle hooks of one config side. Each is optional; a brand
/// hook fully replaces the global hook of the same name on merge.
#[derive(Clone, Default)]
pub struct Decorations {
    pub before_decorate: Option<HookFn>,
    pub decorate: Option<HookFn>,
    pub after_decorate: Option<HookFn>,
}

impl Decorations {
    pub fn get(&self, kind: HookKind) -> Option<&HookFn> {
        match kind {
            HookKind::BeforeDecorate => self.before_decorate.as_ref(),
            HookKind::Decorate => self.decorate.as_ref(),
            HookKind::AfterDecorate => self.after_decorate.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.before_decorate.is_none() && self.decorate.is_none() && self.after_decorate.is_none()
    }
}

impl std::fmt::Debug for Decorations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decorations")
            .field("before_decorate", &self.before_decorate.is_some())
            .field("decorate", &self.decorate.is_some())
            .field("after_decorate", &self.after_decorate.is_some())
            .finish()
    }
}

/// How a variation behaves once its class marker matches.
#[derive(Clone)]
pub enum Behavior {
    /// Run immediately on the dispatching task.
    Inline(VariationFn),
    /// Resolve a behavior through the registry's variation-module table,
    /// keyed by this module name, and run it once loaded.
    Module(String),
}

impl std::fmt::Debug for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Behavior::Inline(_) => f.write_str("Behavior::Inline"),
            Behavior::Module(key) => write!(f, "Behavior::Module({key})"),
        }
    }
}

/// An additional decoration keyed by class membership on the block element.
#[derive(Clone, Debug)]
pub struct Variation {
    pub name: String,
    pub behavior: Behavior,
}

/// The configuration consumed by one block type.
///
/// Built by configuration modules (global and brand) and combined by
/// [`crate::merge::merge`]; consumers only ever see `Arc<BlockConfig>`.
#[derive(Clone, Default)]
pub struct BlockConfig {
    /// Consumer-defined options, no fixed schema.
    pub flags: HashMap<String, Value>,
    pub decorations: Decorations,
    /// Dispatch order is list order: global entries precede brand entries.
    pub variations: Vec<Variation>,
    pub cache_reset_handlers: Vec<ResetFn>,
}

impl BlockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    /// Read a flag back; `None` when unset.
    pub fn flag_value(&self, name: &str) -> Option<&Value> {
        self.flags.get(name)
    }

    pub fn before_decorate(mut self, hook: HookFn) -> Self {
        self.decorations.before_decorate = Some(hook);
        self
    }

    pub fn decorate(mut self, hook: HookFn) -> Self {
        self.decorations.decorate = Some(hook);
        self
    }

    pub fn after_decorate(mut self, hook: HookFn) -> Self {
        self.decorations.after_decorate = Some(hook);
        self
    }

    /// Add an inline variation.
    pub fn variation(mut self, name: impl Into<String>, behavior: VariationFn) -> Self {
        self.variations.push(Variation {
            name: name.into(),
            behavior: Behavior::Inline(behavior),
        });
        self
    }

    /// Add a variation whose behavior loads through the registry's
    /// variation-module table.
    pub fn deferred_variation(
        mut self,
        name: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        self.variations.push(Variation {
            name: name.into(),
            behavior: Behavior::Module(module.into()),
        });
        self
    }

    pub fn cache_reset(mut self, handler: ResetFn) -> Self {
        self.cache_reset_handlers.push(handler);
        self
    }
}

impl std::fmt::Debug for BlockConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockConfig")
            .field("flags", &self.flags)
            .field("decorations", &self.decorations)
            .field("variations", &self.variations)
            .field("cache_reset_handlers", &self.cache_reset_handlers.len())
            .finish()
    }
}

/// Wrap an async closure as a [`HookFn`].
pub fn hook<F, Fut>(hook: F) -> HookFn
where
    F: Fn(Arc<Element>, Arc<BlockConfig>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Arc::new(move |element, config| Box::pin(hook(element, config)))
}

/// Wrap a synchronous closure as a [`HookFn`].
pub fn sync_hook<F>(hook: F) -> HookFn
where
    F: Fn(&Element, &BlockConfig) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(move |element, config| {
        let result = hook(&element, &config);
        Box::pin(std::future::ready(result))
    })
}

/// Wrap a closure as a [`VariationFn`].
pub fn variation_fn<F>(behavior: F) -> VariationFn
where
    F: Fn(&Element, &BlockConfig) + Send + Sync + 'static,
{
    Arc::new(behavior)
}

/// Wrap a closure as a [`ResetFn`].
pub fn reset_fn<F>(handler: F) -> ResetFn
where
    F: Fn(&Element, &BlockConfig) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(handler)
}
