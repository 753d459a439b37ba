//! Transport template records and the build walk that produces them.
//!
//! A template is the serializable, callback-free image of a menu tree. Every
//! optional field is omitted when unset so the host can tell "not specified"
//! apart from an explicit false/empty value.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::item::{MenuItem, Placement};
use crate::registry::ClickRegistry;
use crate::role::MenuRole;

/// Wire spelling of an item's type tag. Role items carry no tag; the role
/// field implies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Normal,
    Checkbox,
    Radio,
    Separator,
    Submenu,
}

/// Sharing payload for a `shareMenu` record. Keys are present only when the
/// corresponding list is non-empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_paths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
}

/// One serializable menu item. Submenu records recurse through `submenu`.
/// Never contains a callback.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MenuRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharing_item: Option<SharingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<MenuItemRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_group_containing: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_group_containing: Option<Vec<String>>,
}

impl MenuItemRecord {
    fn apply_placement(&mut self, placement: &Placement) {
        self.before = placement.before.clone();
        self.after = placement.after.clone();
        self.before_group_containing = placement.before_group_containing.clone();
        self.after_group_containing = placement.after_group_containing.clone();
    }
}

fn non_empty(id: &str) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

impl MenuItem {
    /// Converts this item (and, for submenus, its children) into its
    /// transport record. Does not validate id uniqueness; that happens in
    /// [`build_template`], which walks a whole tree.
    pub fn to_record(&self) -> Result<MenuItemRecord, MenuError> {
        let mut record = self.record_shallow()?;
        if let MenuItem::Submenu(submenu) = self {
            let children = submenu
                .items
                .iter()
                .map(MenuItem::to_record)
                .collect::<Result<Vec<_>, _>>()?;
            record.submenu = Some(children);
        }
        Ok(record)
    }

    /// Record for this item alone, leaving `submenu` unset.
    pub(crate) fn record_shallow(&self) -> Result<MenuItemRecord, MenuError> {
        let mut record = MenuItemRecord::default();
        match self {
            MenuItem::Normal(item) => {
                record.id = non_empty(&item.common.id);
                record.item_type = Some(ItemType::Normal);
                record.label = Some(item.label.clone());
                record.accelerator = item.accelerator.clone();
                record.sublabel = item.sublabel.clone();
                record.tool_tip = item.tool_tip.clone();
                record.icon = item.icon.clone();
                record.enabled = item.common.enabled;
                record.visible = item.common.visible;
                record.apply_placement(&item.common.placement);
            }
            MenuItem::Checkbox(item) => {
                record.id = non_empty(&item.common.id);
                record.item_type = Some(ItemType::Checkbox);
                record.label = Some(item.label.clone());
                record.checked = Some(item.checked);
                record.accelerator = item.accelerator.clone();
                record.sublabel = item.sublabel.clone();
                record.tool_tip = item.tool_tip.clone();
                record.icon = item.icon.clone();
                record.enabled = item.common.enabled;
                record.visible = item.common.visible;
                record.apply_placement(&item.common.placement);
            }
            MenuItem::Radio(item) => {
                record.id = non_empty(&item.common.id);
                record.item_type = Some(ItemType::Radio);
                record.label = Some(item.label.clone());
                record.checked = Some(item.checked);
                record.accelerator = item.accelerator.clone();
                record.sublabel = item.sublabel.clone();
                record.tool_tip = item.tool_tip.clone();
                record.icon = item.icon.clone();
                record.enabled = item.common.enabled;
                record.visible = item.common.visible;
                record.apply_placement(&item.common.placement);
            }
            MenuItem::Role(item) => {
                record.id = non_empty(&item.common.id);
                record.role = Some(item.role);
                record.accelerator = item.accelerator.clone();
                record.enabled = item.common.enabled;
                record.visible = item.common.visible;
                record.apply_placement(&item.common.placement);
            }
            MenuItem::Separator(item) => {
                record.item_type = Some(ItemType::Separator);
                record.apply_placement(&item.placement);
            }
            MenuItem::Submenu(item) => {
                record.id = non_empty(&item.common.id);
                record.item_type = Some(ItemType::Submenu);
                record.label = Some(item.label.clone());
                record.accelerator = item.accelerator.clone();
                record.sublabel = item.sublabel.clone();
                record.icon = item.icon.clone();
                record.enabled = item.common.enabled;
                record.visible = item.common.visible;
                record.apply_placement(&item.common.placement);
            }
            MenuItem::Share(item) => {
                if item.is_empty() {
                    return Err(MenuError::EmptyShare);
                }
                record.id = non_empty(&item.common.id);
                record.role = Some(MenuRole::ShareMenu);
                record.sharing_item = Some(SharingItem {
                    file_paths: (!item.file_paths.is_empty()).then(|| item.file_paths.clone()),
                    texts: (!item.texts.is_empty()).then(|| item.texts.clone()),
                    urls: (!item.urls.is_empty()).then(|| item.urls.clone()),
                });
                record.enabled = item.common.enabled;
                record.visible = item.common.visible;
                record.apply_placement(&item.common.placement);
            }
        }
        Ok(record)
    }
}

/// Walks a whole menu tree depth-first: rejects duplicate non-empty ids,
/// repopulates the click registry in tree order, and produces the flattened
/// template. The registry is cleared first, so entries from a previous build
/// never survive a rebuild.
pub fn build_template(
    items: &[MenuItem],
    registry: &mut ClickRegistry,
) -> Result<Vec<MenuItemRecord>, MenuError> {
    registry.clear();
    let mut seen = HashSet::new();
    walk(items, &mut seen, registry)
}

fn walk(
    items: &[MenuItem],
    seen: &mut HashSet<String>,
    registry: &mut ClickRegistry,
) -> Result<Vec<MenuItemRecord>, MenuError> {
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let id = item.id();
        if !id.is_empty() {
            if !seen.insert(id.to_string()) {
                return Err(MenuError::DuplicateId { id: id.to_string() });
            }
            if let Some(click) = item.click() {
                registry.insert(id.to_string(), click.clone());
            }
        }
        let mut record = item.record_shallow()?;
        if let MenuItem::Submenu(submenu) = item {
            record.submenu = Some(walk(&submenu.items, seen, registry)?);
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{
        CheckboxItem, NormalItem, RoleItem, SeparatorItem, ShareItem, SubmenuItem,
    };

    fn items_with_submenu() -> Vec<MenuItem> {
        vec![
            NormalItem::new("Open")
                .with_id("open")
                .with_click(|_, _| {})
                .into(),
            SeparatorItem::new().into(),
            SubmenuItem::new("More")
                .with_id("more")
                .with_items(vec![
                    CheckboxItem::new("Wrap", true)
                        .with_id("wrap")
                        .with_click(|_, _| {})
                        .into(),
                    RoleItem::new(MenuRole::Copy).into(),
                ])
                .into(),
        ]
    }

    #[test]
    fn template_matches_tree_order_and_node_count() {
        let items = items_with_submenu();
        let mut registry = ClickRegistry::new();
        let template = build_template(&items, &mut registry).unwrap();

        assert_eq!(template.len(), 3);
        assert_eq!(template[0].id.as_deref(), Some("open"));
        assert_eq!(template[1].item_type, Some(ItemType::Separator));
        let submenu = template[2].submenu.as_ref().unwrap();
        assert_eq!(submenu.len(), 2);
        assert_eq!(submenu[0].checked, Some(true));
        assert_eq!(submenu[1].role, Some(MenuRole::Copy));
    }

    #[test]
    fn duplicate_id_is_rejected_naming_the_offender() {
        let items: Vec<MenuItem> = vec![
            NormalItem::new("A").with_id("dup").into(),
            SubmenuItem::new("Sub")
                .with_id("sub")
                .with_items(vec![NormalItem::new("B").with_id("dup").into()])
                .into(),
        ];
        let mut registry = ClickRegistry::new();
        let err = build_template(&items, &mut registry).unwrap_err();
        assert!(matches!(err, MenuError::DuplicateId { ref id } if id == "dup"));
    }

    #[test]
    fn duplicate_empty_ids_are_tolerated() {
        let items: Vec<MenuItem> = vec![
            SeparatorItem::new().into(),
            SeparatorItem::new().into(),
            RoleItem::new(MenuRole::Cut).into(),
            RoleItem::new(MenuRole::Paste).into(),
        ];
        let mut registry = ClickRegistry::new();
        let template = build_template(&items, &mut registry).unwrap();
        assert_eq!(template.len(), 4);
        assert!(registry.is_empty());
    }

    #[test]
    fn template_serializes_without_callbacks_or_unset_fields() {
        let items = items_with_submenu();
        let mut registry = ClickRegistry::new();
        let template = build_template(&items, &mut registry).unwrap();

        let json = serde_json::to_value(&template).unwrap();
        let first = &json[0];
        assert_eq!(first["type"], "normal");
        assert_eq!(first["label"], "Open");
        // Unset options must be omitted, not emitted as null.
        assert!(first.get("enabled").is_none());
        assert!(first.get("visible").is_none());
        assert!(first.get("accelerator").is_none());
        assert!(first.get("click").is_none());
        // Separators omit the id entirely.
        assert!(json[1].get("id").is_none());
        // Role records carry no type tag.
        assert!(json[2]["submenu"][1].get("type").is_none());
        assert_eq!(json[2]["submenu"][1]["role"], "copy");
    }

    #[test]
    fn registry_collects_click_handlers_in_tree_order() {
        let items = items_with_submenu();
        let mut registry = ClickRegistry::new();
        build_template(&items, &mut registry).unwrap();

        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids, ["open", "wrap"]);
    }

    #[test]
    fn rebuild_discards_stale_registry_entries() {
        let mut registry = ClickRegistry::new();
        let first: Vec<MenuItem> = vec![NormalItem::new("Old")
            .with_id("old")
            .with_click(|_, _| {})
            .into()];
        build_template(&first, &mut registry).unwrap();
        assert!(registry.contains("old"));

        let second: Vec<MenuItem> = vec![NormalItem::new("New")
            .with_id("new")
            .with_click(|_, _| {})
            .into()];
        build_template(&second, &mut registry).unwrap();
        assert!(!registry.contains("old"));
        assert!(registry.contains("new"));
    }

    #[test]
    fn empty_share_item_fails_to_build() {
        let items: Vec<MenuItem> = vec![ShareItem::new().with_id("share").into()];
        let mut registry = ClickRegistry::new();
        let err = build_template(&items, &mut registry).unwrap_err();
        assert!(matches!(err, MenuError::EmptyShare));
    }

    #[test]
    fn share_item_emits_share_role_and_payload() {
        let item: MenuItem = ShareItem::new()
            .with_id("share")
            .with_urls(vec!["https://example.com".into()])
            .into();
        let record = item.to_record().unwrap();
        assert_eq!(record.role, Some(MenuRole::ShareMenu));
        let sharing = record.sharing_item.unwrap();
        assert_eq!(sharing.urls.unwrap(), vec!["https://example.com"]);
        assert!(sharing.file_paths.is_none());
        assert!(sharing.texts.is_none());
    }
}
