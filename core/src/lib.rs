pub mod config;
pub mod element;
pub mod error;
pub mod merge;
pub mod page;

pub use config::{
    Behavior, BlockConfig, BoxFuture, Decorations, HookFn, HookKind, ResetFn, Variation,
    VariationFn, hook, reset_fn, sync_hook, variation_fn,
};
pub use element::{BlockStatus, Element, build_block};
pub use error::{BlockError, ConfigScope};
pub use merge::merge;
pub use page::Page;
