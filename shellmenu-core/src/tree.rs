//! Group operations over an owned menu tree.
//!
//! Items carry no parent back-reference; sibling lookups locate the sibling
//! list that contains the target id instead. That keeps the tree a plain
//! acyclic ownership structure while still supporting grouped behavior like
//! radio exclusivity.

use crate::item::MenuItem;

/// Finds an item anywhere in the tree by its non-empty id.
pub fn find<'a>(items: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
    if id.is_empty() {
        return None;
    }
    for item in items {
        if item.id() == id {
            return Some(item);
        }
        if let MenuItem::Submenu(submenu) = item {
            if let Some(found) = find(&submenu.items, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Checks the radio item with the given id and clears every other radio item
/// in the same sibling group. Local and synchronous; no protocol round trip,
/// and the next build picks up the new state. Returns false when no radio
/// item with that id exists.
pub fn select_radio(items: &mut [MenuItem], id: &str) -> bool {
    if id.is_empty() {
        return false;
    }
    let in_group = items
        .iter()
        .any(|item| matches!(item, MenuItem::Radio(radio) if radio.common.id == id));
    if in_group {
        for item in items.iter_mut() {
            if let MenuItem::Radio(radio) = item {
                radio.checked = radio.common.id == id;
            }
        }
        return true;
    }
    for item in items.iter_mut() {
        if let MenuItem::Submenu(submenu) = item {
            if select_radio(&mut submenu.items, id) {
                return true;
            }
        }
    }
    false
}

/// Sets the checked state of the checkbox with the given id. Checkboxes
/// toggle independently; siblings are untouched. Returns false when no
/// checkbox with that id exists.
pub fn set_checked(items: &mut [MenuItem], id: &str, checked: bool) -> bool {
    if id.is_empty() {
        return false;
    }
    for item in items.iter_mut() {
        match item {
            MenuItem::Checkbox(checkbox) if checkbox.common.id == id => {
                checkbox.checked = checked;
                return true;
            }
            MenuItem::Submenu(submenu) => {
                if set_checked(&mut submenu.items, id, checked) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
