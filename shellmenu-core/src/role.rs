//! System-defined menu item roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A host-native menu operation. Role items delegate both their label and
/// their behavior to the host, which is why [`RoleItem`](crate::item::RoleItem)
/// has no label or click fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuRole {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    PasteAndMatchStyle,
    Delete,
    SelectAll,
    Reload,
    ForceReload,
    ToggleDevTools,
    ResetZoom,
    ZoomIn,
    ZoomOut,
    ToggleFullScreen,
    Minimize,
    Close,
    Quit,
    About,
    Services,
    Hide,
    HideOthers,
    Unhide,
    Front,
    Window,
    Help,
    /// Share sheet; emitted by [`ShareItem`](crate::item::ShareItem) together
    /// with its sharing payload.
    ShareMenu,
}

impl MenuRole {
    /// The wire spelling of the role, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuRole::Undo => "undo",
            MenuRole::Redo => "redo",
            MenuRole::Cut => "cut",
            MenuRole::Copy => "copy",
            MenuRole::Paste => "paste",
            MenuRole::PasteAndMatchStyle => "pasteAndMatchStyle",
            MenuRole::Delete => "delete",
            MenuRole::SelectAll => "selectAll",
            MenuRole::Reload => "reload",
            MenuRole::ForceReload => "forceReload",
            MenuRole::ToggleDevTools => "toggleDevTools",
            MenuRole::ResetZoom => "resetZoom",
            MenuRole::ZoomIn => "zoomIn",
            MenuRole::ZoomOut => "zoomOut",
            MenuRole::ToggleFullScreen => "toggleFullScreen",
            MenuRole::Minimize => "minimize",
            MenuRole::Close => "close",
            MenuRole::Quit => "quit",
            MenuRole::About => "about",
            MenuRole::Services => "services",
            MenuRole::Hide => "hide",
            MenuRole::HideOthers => "hideOthers",
            MenuRole::Unhide => "unhide",
            MenuRole::Front => "front",
            MenuRole::Window => "window",
            MenuRole::Help => "help",
            MenuRole::ShareMenu => "shareMenu",
        }
    }
}

impl fmt::Display for MenuRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_form_matches_as_str() {
        for role in [
            MenuRole::Cut,
            MenuRole::PasteAndMatchStyle,
            MenuRole::ToggleDevTools,
            MenuRole::ShareMenu,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }
}
