//! Fluent menu construction.

use std::sync::Arc;

use crate::ids::{IdGenerator, UuidGenerator};
use crate::item::{
    CheckboxItem, MenuItem, NormalItem, RadioItem, RoleItem, SeparatorItem, ShareItem, SubmenuItem,
};
use crate::role::MenuRole;

/// Accumulates sibling menu items in insertion order.
///
/// Every convenience method returns `&mut Self` for chaining. Child closures
/// passed to [`submenu`](MenuBuilder::submenu) receive a fresh builder sharing
/// this builder's id generator and return nothing, so there is no return
/// value to forget.
///
/// The builder assigns a generated id to any clickable item added without
/// one; separators and role items keep the empty sentinel. Two distinct items
/// with the same explicit id are both accepted here — uniqueness is a
/// tree-wide property enforced when the owning menu builds its template.
///
/// ```
/// use shellmenu_core::builder::MenuBuilder;
/// use shellmenu_core::item::{NormalItem, SubmenuItem};
/// use shellmenu_core::role::MenuRole;
///
/// let mut builder = MenuBuilder::new();
/// builder
///     .normal(NormalItem::new("Back").with_id("back"))
///     .separator()
///     .role(MenuRole::Copy)
///     .submenu(SubmenuItem::new("Zoom"), |zoom| {
///         zoom.normal(NormalItem::new("Reset").with_id("zoom-reset"));
///     });
/// assert_eq!(builder.items().len(), 4);
/// ```
pub struct MenuBuilder {
    ids: Arc<dyn IdGenerator>,
    items: Vec<MenuItem>,
}

impl MenuBuilder {
    /// Builder with random (UUIDv4) id generation.
    pub fn new() -> Self {
        Self::with_ids(Arc::new(UuidGenerator))
    }

    /// Builder with an injected id generator.
    pub fn with_ids(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            items: Vec::new(),
        }
    }

    /// Adds a pre-constructed item, assigning a generated id if the item
    /// needs one and none was given.
    pub fn add(&mut self, item: impl Into<MenuItem>) -> &mut Self {
        let mut item = item.into();
        if item.id().is_empty() && item.wants_generated_id() {
            item.set_id(self.ids.next_id());
        }
        self.items.push(item);
        self
    }

    pub fn normal(&mut self, item: NormalItem) -> &mut Self {
        self.add(item)
    }

    pub fn checkbox(&mut self, item: CheckboxItem) -> &mut Self {
        self.add(item)
    }

    pub fn radio(&mut self, item: RadioItem) -> &mut Self {
        self.add(item)
    }

    /// Adds a bare role item.
    pub fn role(&mut self, role: MenuRole) -> &mut Self {
        self.add(RoleItem::new(role))
    }

    /// Adds a role item with extra options (accelerator, placement).
    pub fn role_item(&mut self, item: RoleItem) -> &mut Self {
        self.add(item)
    }

    pub fn separator(&mut self) -> &mut Self {
        self.add(SeparatorItem::new())
    }

    pub fn share(&mut self, item: ShareItem) -> &mut Self {
        self.add(item)
    }

    /// Adds a submenu whose children are collected by `build`, run against a
    /// fresh builder sharing this builder's id generator. Children already on
    /// `item` are kept and the built ones appended.
    pub fn submenu<F>(&mut self, item: SubmenuItem, build: F) -> &mut Self
    where
        F: FnOnce(&mut MenuBuilder),
    {
        let mut child = MenuBuilder::with_ids(self.ids.clone());
        build(&mut child);
        let mut item = item;
        item.items.extend(child.into_items());
        self.add(item)
    }

    /// Adds a submenu with a pre-built child list. Each child still gets a
    /// generated id if it needs one.
    pub fn submenu_items(&mut self, item: SubmenuItem, children: Vec<MenuItem>) -> &mut Self {
        self.submenu(item, |builder| {
            for child in children {
                builder.add(child);
            }
        })
    }

    /// Calls `each` once per value, for adding runs of similar items.
    pub fn map<T, F>(&mut self, values: impl IntoIterator<Item = T>, mut each: F) -> &mut Self
    where
        F: FnMut(&mut MenuBuilder, T),
    {
        for value in values {
            each(self, value);
        }
        self
    }

    /// Items added so far, in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Consumes the builder, yielding its items.
    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }
}

impl Default for MenuBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn assigns_generated_ids_to_clickable_items_only() {
        let mut builder = MenuBuilder::with_ids(Arc::new(SequentialIds::new("item")));
        builder
            .normal(NormalItem::new("First"))
            .separator()
            .role(MenuRole::Cut)
            .checkbox(CheckboxItem::new("Check", false));

        let items = builder.items();
        assert_eq!(items[0].id(), "item-1");
        assert_eq!(items[1].id(), "");
        assert_eq!(items[2].id(), "");
        assert_eq!(items[3].id(), "item-2");
    }

    #[test]
    fn explicit_ids_are_never_overwritten() {
        let mut builder = MenuBuilder::with_ids(Arc::new(SequentialIds::new("item")));
        builder.normal(NormalItem::new("Named").with_id("named"));
        assert_eq!(builder.items()[0].id(), "named");
    }

    #[test]
    fn submenu_closure_shares_the_id_generator() {
        let mut builder = MenuBuilder::with_ids(Arc::new(SequentialIds::new("item")));
        builder.submenu(SubmenuItem::new("Sub"), |sub| {
            sub.normal(NormalItem::new("Child"));
        });

        let submenu = &builder.items()[0];
        let children = submenu.submenu_items().unwrap();
        assert_eq!(children[0].id(), "item-1");
        assert_eq!(submenu.id(), "item-2");
    }

    #[test]
    fn submenu_accepts_a_prebuilt_child_array() {
        let mut builder = MenuBuilder::new();
        builder.submenu_items(
            SubmenuItem::new("Sub").with_id("sub"),
            vec![
                NormalItem::new("A").with_id("a").into(),
                NormalItem::new("B").with_id("b").into(),
            ],
        );
        let children = builder.items()[0].submenu_items().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].id(), "b");
    }

    #[test]
    fn map_adds_one_item_per_value() {
        let mut builder = MenuBuilder::new();
        builder.map(["one", "two", "three"], |b, label| {
            b.radio(RadioItem::new(label, label == "two").with_id(label));
        });
        assert_eq!(builder.items().len(), 3);
        assert_eq!(builder.items()[1].checked(), Some(true));
    }

    #[test]
    fn same_explicit_id_twice_is_accepted_by_the_builder() {
        // Uniqueness is enforced at menu build time, not here.
        let mut builder = MenuBuilder::new();
        builder
            .normal(NormalItem::new("A").with_id("dup"))
            .normal(NormalItem::new("B").with_id("dup"));
        assert_eq!(builder.items().len(), 2);
    }
}
