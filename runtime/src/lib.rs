pub mod context;
pub mod dispatcher;
pub mod executor;
pub mod host;
pub mod loader;
pub mod locator;
pub mod registry;

pub mod prelude {
    pub use crate::context::RuntimeContext;
    pub use crate::dispatcher::dispatch_variations;
    pub use crate::executor::execute_decorations;
    pub use crate::host::{AssetHost, NullHost};
    pub use crate::loader::{
        load_block, load_footer, load_header, load_section, load_sections, render_block,
    };
    pub use crate::locator::load_block_config;
    pub use crate::registry::{BlockRegistry, config_loader, variation_loader};
}

pub use context::RuntimeContext;
pub use host::{AssetHost, NullHost};
pub use registry::{BlockRegistry, ConfigLoader, VariationLoader};
