//! Global/brand configuration merging.
//!
//! The precedence rules are deliberately shallow and must hold exactly:
//! brand wins on every key collision, lists concatenate with the global
//! segment first, and an absent side returns the other side unchanged.

use crate::config::BlockConfig;
use std::sync::Arc;

/// Combine a block's global and brand configurations.
///
/// - One side absent: the other `Arc` is returned as-is (pointer-equal).
/// - `flags`: shallow-merged; a key present in both takes the brand value.
/// - `variations` / `cache_reset_handlers`: global entries first, then
///   brand entries, each side's internal order preserved.
/// - `decorations`: per hook name, a brand hook fully replaces the global
///   one; no composition.
pub fn merge(
    global: Option<Arc<BlockConfig>>,
    brand: Option<Arc<BlockConfig>>,
) -> Option<Arc<BlockConfig>> {
    let (global, brand) = match (global, brand) {
        (None, other) | (other, None) => return other,
        (Some(global), Some(brand)) => (global, brand),
    };

    let mut merged = BlockConfig {
        flags: global.flags.clone(),
        decorations: global.decorations.clone(),
        variations: global.variations.clone(),
        cache_reset_handlers: global.cache_reset_handlers.clone(),
    };

    merged
        .flags
        .extend(brand.flags.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged.variations.extend(brand.variations.iter().cloned());
    merged
        .cache_reset_handlers
        .extend(brand.cache_reset_handlers.iter().cloned());

    if let Some(hook) = &brand.decorations.before_decorate {
        merged.decorations.before_decorate = Some(Arc::clone(hook));
    }
    if let Some(hook) = &brand.decorations.decorate {
        merged.decorations.decorate = Some(Arc::clone(hook));
    }
    if let Some(hook) = &brand.decorations.after_decorate {
        merged.decorations.after_decorate = Some(Arc::clone(hook));
    }

    Some(Arc::new(merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{sync_hook, variation_fn, HookFn};
    use serde_json::Value;

    fn noop_hook() -> HookFn {
        sync_hook(|_, _| Ok(()))
    }

    #[test]
    fn test_absence_symmetry() {
        let config = Arc::new(BlockConfig::new().flag("showImage", true));

        let merged = merge(Some(Arc::clone(&config)), None).unwrap();
        assert!(Arc::ptr_eq(&merged, &config));

        let merged = merge(None, Some(Arc::clone(&config))).unwrap();
        assert!(Arc::ptr_eq(&merged, &config));

        assert!(merge(None, None).is_none());
    }

    #[test]
    fn test_brand_wins_flag_collisions() {
        let global = Arc::new(
            BlockConfig::new()
                .flag("showImage", true)
                .flag("cardStyle", "default"),
        );
        let brand = Arc::new(BlockConfig::new().flag("cardStyle", "rounded"));

        let merged = merge(Some(global), Some(brand)).unwrap();
        assert_eq!(merged.flag_value("showImage"), Some(&Value::Bool(true)));
        assert_eq!(
            merged.flag_value("cardStyle"),
            Some(&Value::String("rounded".into()))
        );
    }

    #[test]
    fn test_variations_concatenate_global_first() {
        let global = Arc::new(
            BlockConfig::new()
                .variation("horizontal", variation_fn(|_, _| {}))
                .variation("compact", variation_fn(|_, _| {})),
        );
        let brand = Arc::new(BlockConfig::new().variation("featured", variation_fn(|_, _| {})));

        let merged = merge(Some(global), Some(brand)).unwrap();
        let names: Vec<&str> = merged.variations.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["horizontal", "compact", "featured"]);
    }

    #[test]
    fn test_reset_handlers_concatenate_global_first() {
        let global_handler = crate::config::reset_fn(|_, _| Ok(()));
        let brand_handler = crate::config::reset_fn(|_, _| Ok(()));
        let global = Arc::new(BlockConfig::new().cache_reset(Arc::clone(&global_handler)));
        let brand = Arc::new(BlockConfig::new().cache_reset(Arc::clone(&brand_handler)));

        let merged = merge(Some(global), Some(brand)).unwrap();
        assert_eq!(merged.cache_reset_handlers.len(), 2);
        assert!(Arc::ptr_eq(&merged.cache_reset_handlers[0], &global_handler));
        assert!(Arc::ptr_eq(&merged.cache_reset_handlers[1], &brand_handler));
    }

    #[test]
    fn test_brand_hook_replaces_global() {
        let global_after = noop_hook();
        let brand_after = noop_hook();
        let global_before = noop_hook();

        let global = Arc::new(
            BlockConfig::new()
                .before_decorate(Arc::clone(&global_before))
                .after_decorate(Arc::clone(&global_after)),
        );
        let brand = Arc::new(BlockConfig::new().after_decorate(Arc::clone(&brand_after)));

        let merged = merge(Some(global), Some(brand)).unwrap();
        let after = merged.decorations.after_decorate.as_ref().unwrap();
        assert!(Arc::ptr_eq(after, &brand_after));
        assert!(!Arc::ptr_eq(after, &global_after));

        // Hooks only one side defines survive untouched.
        let before = merged.decorations.before_decorate.as_ref().unwrap();
        assert!(Arc::ptr_eq(before, &global_before));
    }
}
