//! Page model: metadata plus the root element tree.
//!
//! Brand and theme are plain metadata fields; the runtime context reads
//! them once at construction.

use crate::element::Element;
use std::collections::HashMap;
use std::sync::Arc;

/// Metadata field naming the active brand.
pub const META_BRAND: &str = "brand";
/// Metadata field naming the active theme.
pub const META_THEME: &str = "theme";

/// One rendered page: its metadata and the element tree to decorate.
pub struct Page {
    metadata: HashMap<String, String>,
    root: Arc<Element>,
}

impl Page {
    pub fn new(root: Arc<Element>) -> Self {
        Self {
            metadata: HashMap::new(),
            root,
        }
    }

    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(name.into(), value.into());
        self
    }

    pub fn metadata(&self, name: &str) -> Option<&str> {
        self.metadata.get(name).map(String::as_str)
    }

    pub fn root(&self) -> &Arc<Element> {
        &self.root
    }

    /// Active brand code, if the page declares one. Empty values count as
    /// undeclared.
    pub fn brand(&self) -> Option<&str> {
        self.metadata(META_BRAND).filter(|code| !code.is_empty())
    }

    /// Active theme, if the page declares one.
    pub fn theme(&self) -> Option<&str> {
        self.metadata(META_THEME).filter(|theme| !theme.is_empty())
    }
}
