//! Identifier → click-callback registry.

use indexmap::IndexMap;

use crate::item::OnClick;

/// Per-menu map from item id to click callback, rebuilt wholesale on every
/// build so removed items can never leak a stale handler. Lookup is an
/// optimization over re-walking the tree; insertion order matches tree order.
#[derive(Default)]
pub struct ClickRegistry {
    handlers: IndexMap<String, OnClick>,
}

impl ClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn insert(&mut self, id: String, click: OnClick) {
        self.handlers.insert(id, click);
    }

    pub fn get(&self, id: &str) -> Option<&OnClick> {
        self.handlers.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered ids, in tree order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}
