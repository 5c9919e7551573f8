//! # BlockRegistry: the startup-time loader table
//!
//! Configuration and variation modules are looked up through an explicit
//! table populated when the page boots, never through computed paths. A
//! missing entry is the normal "source absent" outcome; only a loader that
//! runs and fails counts as a fault (and even that degrades to absence).

use brix_core::config::{BlockConfig, BoxFuture, VariationFn};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// Loads one configuration source. Mirrors the configuration-module
/// contract: argument-less, returns the config synchronously or not.
pub type ConfigLoader = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<BlockConfig>> + Send + Sync>;

/// Loads one deferred variation behavior.
pub type VariationLoader =
    Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<VariationFn>> + Send + Sync>;

/// Mapping from block-type names (and variation module keys) to loaders.
///
/// Built once at startup and shared read-only for the page session.
#[derive(Default)]
pub struct BlockRegistry {
    global: HashMap<String, ConfigLoader>,
    brand: HashMap<(String, String), ConfigLoader>,
    variation_modules: HashMap<(String, String), VariationLoader>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the global configuration source for a block type.
    pub fn global_config(mut self, block: impl Into<String>, loader: ConfigLoader) -> Self {
        self.global.insert(block.into(), loader);
        self
    }

    /// Register a brand-specific configuration source for a block type.
    pub fn brand_config(
        mut self,
        brand: impl Into<String>,
        block: impl Into<String>,
        loader: ConfigLoader,
    ) -> Self {
        self.brand.insert((brand.into(), block.into()), loader);
        self
    }

    /// Register a deferred variation module for a block type.
    pub fn variation_module(
        mut self,
        block: impl Into<String>,
        module: impl Into<String>,
        loader: VariationLoader,
    ) -> Self {
        self.variation_modules
            .insert((block.into(), module.into()), loader);
        self
    }

    pub fn global_loader(&self, block: &str) -> Option<ConfigLoader> {
        self.global.get(block).map(Arc::clone)
    }

    pub fn brand_loader(&self, brand: &str, block: &str) -> Option<ConfigLoader> {
        self.brand
            .get(&(brand.to_string(), block.to_string()))
            .map(Arc::clone)
    }

    pub fn variation_module_loader(&self, block: &str, module: &str) -> Option<VariationLoader> {
        self.variation_modules
            .get(&(block.to_string(), module.to_string()))
            .map(Arc::clone)
    }
}

impl std::fmt::Debug for BlockRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockRegistry")
            .field("global", &self.global.len())
            .field("brand", &self.brand.len())
            .field("variation_modules", &self.variation_modules.len())
            .finish()
    }
}

/// Wrap an async closure as a [`ConfigLoader`].
pub fn config_loader<F, Fut>(loader: F) -> ConfigLoader
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<BlockConfig>> + Send + 'static,
{
    Arc::new(move || Box::pin(loader()))
}

/// Wrap an async closure as a [`VariationLoader`].
pub fn variation_loader<F, Fut>(loader: F) -> VariationLoader
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<VariationFn>> + Send + 'static,
{
    Arc::new(move || Box::pin(loader()))
}
