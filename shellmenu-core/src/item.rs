//! Menu item model.
//!
//! Items form a closed tagged union: each variant carries the fields that are
//! meaningful for it and nothing else. A role item cannot hold a click
//! callback or a label at the type level, a separator cannot hold either, and
//! only checkbox/radio items carry a checked flag. Callbacks are never part of
//! the transport template; they stay on the declaring side and are resolved
//! back by item id when a click response arrives.

use std::fmt;
use std::sync::Arc;

use crate::role::MenuRole;
use crate::wire::ClickInfo;

/// Click callback invoked on the declaring side when the host reports that
/// this item was activated. Receives the resolved item and the modifier-key
/// details from the host event.
pub type OnClick = Arc<dyn Fn(&MenuItem, &ClickInfo) + Send + Sync>;

/// Placement hints for the host's layout algorithm. Opaque to this crate and
/// passed through the template verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    /// Insert this item before the items with the given ids.
    pub before: Option<Vec<String>>,
    /// Insert this item after the items with the given ids.
    pub after: Option<Vec<String>>,
    /// Place this item's containing group before the group containing the given ids.
    pub before_group_containing: Option<Vec<String>>,
    /// Place this item's containing group after the group containing the given ids.
    pub after_group_containing: Option<Vec<String>>,
}

impl Placement {
    pub(crate) fn is_empty(&self) -> bool {
        self.before.is_none()
            && self.after.is_none()
            && self.before_group_containing.is_none()
            && self.after_group_containing.is_none()
    }
}

/// Fields shared by every item variant.
///
/// An empty `id` means "not assigned yet"; the builder fills it from its
/// [`IdGenerator`](crate::ids::IdGenerator) for clickable variants.
/// Separators and role items keep the empty sentinel since they are never
/// re-identified from a click response.
#[derive(Clone, Debug, Default)]
pub struct ItemCommon {
    /// Stable identifier, unique across a whole menu tree when non-empty.
    pub id: String,
    /// Whether the item is clickable. `None` leaves the host default.
    pub enabled: Option<bool>,
    /// Whether the item is shown. `None` leaves the host default.
    pub visible: Option<bool>,
    /// Layout placement hints.
    pub placement: Placement,
}

/// A plain clickable menu item.
#[derive(Clone, Default)]
pub struct NormalItem {
    pub common: ItemCommon,
    pub label: String,
    pub accelerator: Option<String>,
    pub sublabel: Option<String>,
    pub tool_tip: Option<String>,
    /// Icon path or data URL; the host resolves it to a native image.
    pub icon: Option<String>,
    pub click: Option<OnClick>,
}

impl NormalItem {
    /// Creates a normal item with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets an explicit id instead of a generated one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.common.id = id.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.common.enabled = Some(enabled);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.common.visible = Some(visible);
        self
    }

    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }

    pub fn with_sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }

    pub fn with_tool_tip(mut self, tool_tip: impl Into<String>) -> Self {
        self.tool_tip = Some(tool_tip.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.common.placement = placement;
        self
    }

    /// Sets the click callback.
    pub fn with_click<F>(mut self, click: F) -> Self
    where
        F: Fn(&MenuItem, &ClickInfo) + Send + Sync + 'static,
    {
        self.click = Some(Arc::new(click));
        self
    }
}

/// A menu item with a toggleable checkmark.
#[derive(Clone, Default)]
pub struct CheckboxItem {
    pub common: ItemCommon,
    pub label: String,
    pub checked: bool,
    pub accelerator: Option<String>,
    pub sublabel: Option<String>,
    pub tool_tip: Option<String>,
    pub icon: Option<String>,
    pub click: Option<OnClick>,
}

impl CheckboxItem {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.common.id = id.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.common.enabled = Some(enabled);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.common.visible = Some(visible);
        self
    }

    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.common.placement = placement;
        self
    }

    pub fn with_click<F>(mut self, click: F) -> Self
    where
        F: Fn(&MenuItem, &ClickInfo) + Send + Sync + 'static,
    {
        self.click = Some(Arc::new(click));
        self
    }
}

/// A single-select menu item. The radio group is implicit: all radio items in
/// the same sibling list belong to one group.
#[derive(Clone, Default)]
pub struct RadioItem {
    pub common: ItemCommon,
    pub label: String,
    pub checked: bool,
    pub accelerator: Option<String>,
    pub sublabel: Option<String>,
    pub tool_tip: Option<String>,
    pub icon: Option<String>,
    pub click: Option<OnClick>,
}

impl RadioItem {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.common.id = id.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.common.enabled = Some(enabled);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.common.visible = Some(visible);
        self
    }

    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.common.placement = placement;
        self
    }

    pub fn with_click<F>(mut self, click: F) -> Self
    where
        F: Fn(&MenuItem, &ClickInfo) + Send + Sync + 'static,
    {
        self.click = Some(Arc::new(click));
        self
    }
}

/// A system-operation menu item. The host supplies the label and the behavior
/// for the role, so this variant carries neither a label nor a click callback.
#[derive(Clone, Debug)]
pub struct RoleItem {
    pub common: ItemCommon,
    pub role: MenuRole,
    pub accelerator: Option<String>,
}

impl RoleItem {
    pub fn new(role: MenuRole) -> Self {
        Self {
            common: ItemCommon::default(),
            role,
            accelerator: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.common.id = id.into();
        self
    }

    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.common.placement = placement;
        self
    }
}

/// A visual divider. Never clickable, never needs an id.
#[derive(Clone, Debug, Default)]
pub struct SeparatorItem {
    /// Layout placement hints.
    pub placement: Placement,
}

impl SeparatorItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}

/// A menu item holding a nested list of child items.
#[derive(Clone, Default)]
pub struct SubmenuItem {
    pub common: ItemCommon,
    pub label: String,
    pub accelerator: Option<String>,
    pub sublabel: Option<String>,
    pub icon: Option<String>,
    /// Child items, in insertion order.
    pub items: Vec<MenuItem>,
}

impl SubmenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.common.id = id.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.common.enabled = Some(enabled);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.common.visible = Some(visible);
        self
    }

    pub fn with_sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }
}

/// A share-sheet entry (macOS `shareMenu` role). Must reference at least one
/// file path, text, or URL by the time the template is built.
#[derive(Clone, Debug, Default)]
pub struct ShareItem {
    pub common: ItemCommon,
    pub file_paths: Vec<String>,
    pub texts: Vec<String>,
    pub urls: Vec<String>,
}

impl ShareItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.common.id = id.into();
        self
    }

    pub fn with_file_paths(mut self, file_paths: Vec<String>) -> Self {
        self.file_paths = file_paths;
        self
    }

    pub fn with_texts(mut self, texts: Vec<String>) -> Self {
        self.texts = texts;
        self
    }

    pub fn with_urls(mut self, urls: Vec<String>) -> Self {
        self.urls = urls;
        self
    }

    /// True when nothing is being shared.
    pub fn is_empty(&self) -> bool {
        self.file_paths.is_empty() && self.texts.is_empty() && self.urls.is_empty()
    }
}

/// A menu item of any kind.
#[derive(Clone)]
pub enum MenuItem {
    Normal(NormalItem),
    Checkbox(CheckboxItem),
    Radio(RadioItem),
    Role(RoleItem),
    Separator(SeparatorItem),
    Submenu(SubmenuItem),
    Share(ShareItem),
}

impl MenuItem {
    /// The item's identifier. Empty for separators and for items the builder
    /// has not assigned yet.
    pub fn id(&self) -> &str {
        match self {
            MenuItem::Normal(item) => &item.common.id,
            MenuItem::Checkbox(item) => &item.common.id,
            MenuItem::Radio(item) => &item.common.id,
            MenuItem::Role(item) => &item.common.id,
            MenuItem::Separator(_) => "",
            MenuItem::Submenu(item) => &item.common.id,
            MenuItem::Share(item) => &item.common.id,
        }
    }

    /// The display label, for variants that have one.
    pub fn label(&self) -> Option<&str> {
        match self {
            MenuItem::Normal(item) => Some(&item.label),
            MenuItem::Checkbox(item) => Some(&item.label),
            MenuItem::Radio(item) => Some(&item.label),
            MenuItem::Submenu(item) => Some(&item.label),
            MenuItem::Role(_) | MenuItem::Separator(_) | MenuItem::Share(_) => None,
        }
    }

    /// The click callback, for variants that can carry one.
    pub fn click(&self) -> Option<&OnClick> {
        match self {
            MenuItem::Normal(item) => item.click.as_ref(),
            MenuItem::Checkbox(item) => item.click.as_ref(),
            MenuItem::Radio(item) => item.click.as_ref(),
            _ => None,
        }
    }

    /// The checked flag, for checkbox and radio items.
    pub fn checked(&self) -> Option<bool> {
        match self {
            MenuItem::Checkbox(item) => Some(item.checked),
            MenuItem::Radio(item) => Some(item.checked),
            _ => None,
        }
    }

    /// Child items, if this is a submenu.
    pub fn submenu_items(&self) -> Option<&[MenuItem]> {
        match self {
            MenuItem::Submenu(item) => Some(&item.items),
            _ => None,
        }
    }

    /// Whether the builder should assign a generated id when none was given.
    /// Separators never get one; role items only perform host behavior and
    /// don't need re-identification either.
    pub(crate) fn wants_generated_id(&self) -> bool {
        !matches!(self, MenuItem::Separator(_) | MenuItem::Role(_))
    }

    pub(crate) fn set_id(&mut self, id: String) {
        match self {
            MenuItem::Normal(item) => item.common.id = id,
            MenuItem::Checkbox(item) => item.common.id = id,
            MenuItem::Radio(item) => item.common.id = id,
            MenuItem::Role(item) => item.common.id = id,
            MenuItem::Separator(_) => {}
            MenuItem::Submenu(item) => item.common.id = id,
            MenuItem::Share(item) => item.common.id = id,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            MenuItem::Normal(_) => "normal",
            MenuItem::Checkbox(_) => "checkbox",
            MenuItem::Radio(_) => "radio",
            MenuItem::Role(_) => "role",
            MenuItem::Separator(_) => "separator",
            MenuItem::Submenu(_) => "submenu",
            MenuItem::Share(_) => "share",
        }
    }
}

// Callbacks aren't Debug, so render items by kind, id, and label.
impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("MenuItem");
        out.field("kind", &self.kind_name()).field("id", &self.id());
        if let Some(label) = self.label() {
            out.field("label", &label);
        }
        out.finish()
    }
}

impl From<NormalItem> for MenuItem {
    fn from(item: NormalItem) -> Self {
        MenuItem::Normal(item)
    }
}

impl From<CheckboxItem> for MenuItem {
    fn from(item: CheckboxItem) -> Self {
        MenuItem::Checkbox(item)
    }
}

impl From<RadioItem> for MenuItem {
    fn from(item: RadioItem) -> Self {
        MenuItem::Radio(item)
    }
}

impl From<RoleItem> for MenuItem {
    fn from(item: RoleItem) -> Self {
        MenuItem::Role(item)
    }
}

impl From<SeparatorItem> for MenuItem {
    fn from(item: SeparatorItem) -> Self {
        MenuItem::Separator(item)
    }
}

impl From<SubmenuItem> for MenuItem {
    fn from(item: SubmenuItem) -> Self {
        MenuItem::Submenu(item)
    }
}

impl From<ShareItem> for MenuItem {
    fn from(item: ShareItem) -> Self {
        MenuItem::Share(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_has_no_id_or_click() {
        let item = MenuItem::from(SeparatorItem::new());
        assert_eq!(item.id(), "");
        assert!(item.click().is_none());
        assert!(item.label().is_none());
    }

    #[test]
    fn normal_item_keeps_explicit_id() {
        let item = MenuItem::from(NormalItem::new("Open").with_id("open"));
        assert_eq!(item.id(), "open");
        assert_eq!(item.label(), Some("Open"));
    }

    #[test]
    fn role_item_carries_neither_label_nor_click() {
        let item = MenuItem::from(RoleItem::new(MenuRole::Copy));
        assert!(item.label().is_none());
        assert!(item.click().is_none());
        assert!(!item.wants_generated_id());
    }
}
