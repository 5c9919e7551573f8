//! Host-environment seam for asset delivery.
//!
//! The runtime never fetches stylesheets itself; the embedding host does.
//! Brand and theme segments are passed through so the host can resolve
//! `blocks/<name>/<brand>/<theme>/<name>.css`-style conventions.

use async_trait::async_trait;

#[async_trait]
pub trait AssetHost: Send + Sync {
    /// Fetch and apply the stylesheet for one block type. A missing
    /// stylesheet is a host-side concern; errors are logged by the loader
    /// and never block the page.
    async fn load_stylesheet(
        &self,
        block: &str,
        brand: Option<&str>,
        theme: Option<&str>,
    ) -> anyhow::Result<()>;
}

/// Host with no stylesheet delivery. Used by tests and by embedders that
/// manage CSS entirely outside the runtime.
pub struct NullHost;

#[async_trait]
impl AssetHost for NullHost {
    async fn load_stylesheet(
        &self,
        _block: &str,
        _brand: Option<&str>,
        _theme: Option<&str>,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}
