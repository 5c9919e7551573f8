//! # Element: the decoration target
//!
//! Blocks are decorated in place, so the element is a small DOM-ish node:
//! an attribute map, an ordered class list, and ordered children. Hooks
//! receive it behind an `Arc` and mutate it through interior locks, which
//! keeps the hook signatures `Send + Sync` without threading `&mut`
//! through the whole runtime.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Data attribute carrying the block-type name.
pub const ATTR_BLOCK_NAME: &str = "data-block-name";
/// Data attribute tracking a block's runtime state.
pub const ATTR_BLOCK_STATUS: &str = "data-block-status";
/// Data attribute tracking a section's runtime state.
pub const ATTR_SECTION_STATUS: &str = "data-section-status";

/// Class marking an element as a block.
pub const CLASS_BLOCK: &str = "block";
/// Class marking an element as a section.
pub const CLASS_SECTION: &str = "section";

/// Runtime state of one block element.
///
/// Stored as an attribute on the element itself so it survives independent
/// of any external map. A block enters `Loading` at most once and never
/// re-enters it from `Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockStatus {
    #[default]
    Uninitialized,
    Loading,
    Loaded,
}

impl BlockStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockStatus::Uninitialized => "uninitialized",
            BlockStatus::Loading => "loading",
            BlockStatus::Loaded => "loaded",
        }
    }

    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("loading") => BlockStatus::Loading,
            Some("loaded") => BlockStatus::Loaded,
            _ => BlockStatus::Uninitialized,
        }
    }
}

/// A content element on the page.
///
/// Shared as `Arc<Element>`; all mutation goes through the interior locks.
/// Document order is the order of `children`.
pub struct Element {
    id: Uuid,
    attrs: RwLock<HashMap<String, String>>,
    classes: RwLock<Vec<String>>,
    children: RwLock<Vec<Arc<Element>>>,
}

impl Element {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            attrs: RwLock::new(HashMap::new()),
            classes: RwLock::new(Vec::new()),
            children: RwLock::new(Vec::new()),
        })
    }

    /// Diagnostic identity; never used for addressing.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.read().get(name).cloned()
    }

    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.write().insert(name.into(), value.into());
    }

    pub fn remove_attr(&self, name: &str) -> Option<String> {
        self.attrs.write().remove(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.read().iter().any(|c| c == class)
    }

    pub fn add_class(&self, class: impl Into<String>) {
        let class = class.into();
        let mut classes = self.classes.write();
        if !classes.iter().any(|c| *c == class) {
            classes.push(class);
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.classes.write().retain(|c| c != class);
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.read().clone()
    }

    pub fn append_child(&self, child: Arc<Element>) {
        self.children.write().push(child);
    }

    pub fn children(&self) -> Vec<Arc<Element>> {
        self.children.read().clone()
    }

    /// Depth-first preorder walk collecting descendants carrying `class`.
    /// This is the document-order query the loader drives from.
    pub fn descendants_with_class(&self, class: &str) -> Vec<Arc<Element>> {
        let mut found = Vec::new();
        for child in self.children.read().iter() {
            if child.has_class(class) {
                found.push(Arc::clone(child));
            }
            found.extend(child.descendants_with_class(class));
        }
        found
    }

    /// Block-type name, if this element is a block.
    pub fn block_name(&self) -> Option<String> {
        self.attr(ATTR_BLOCK_NAME)
    }

    pub fn block_status(&self) -> BlockStatus {
        BlockStatus::parse(self.attr(ATTR_BLOCK_STATUS).as_deref())
    }

    pub fn set_block_status(&self, status: BlockStatus) {
        self.set_attr(ATTR_BLOCK_STATUS, status.as_str());
    }

    /// Atomically transition `Uninitialized -> Loading`.
    ///
    /// Returns `true` for exactly one caller; a block already `Loading` or
    /// `Loaded` is left untouched. The check and the write happen under one
    /// lock guard, so two concurrent triggers cannot both win.
    pub fn try_begin_loading(&self) -> bool {
        let mut attrs = self.attrs.write();
        let current = BlockStatus::parse(attrs.get(ATTR_BLOCK_STATUS).map(String::as_str));
        if current != BlockStatus::Uninitialized {
            return false;
        }
        attrs.insert(
            ATTR_BLOCK_STATUS.to_string(),
            BlockStatus::Loading.as_str().to_string(),
        );
        true
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("classes", &*self.classes.read())
            .field("attrs", &*self.attrs.read())
            .field("child_count", &self.children.read().len())
            .finish()
    }
}

/// Build a block element the way the authoring layer would: the block name
/// and the `block` marker as classes, plus the block-name data attribute.
pub fn build_block(name: &str) -> Arc<Element> {
    let block = Element::new();
    block.add_class(name);
    block.add_class(CLASS_BLOCK);
    block.set_attr(ATTR_BLOCK_NAME, name);
    block
}
