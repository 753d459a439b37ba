#![warn(missing_docs)]

//! Cross-process menu construction for desktop shells.

pub use shellmenu_core as core;

/// Protocol runtime: context/application menus and the host transport seam.
pub mod client {
    pub use shellmenu_client::*;
}

/// A "prelude" for users of shellmenu.
///
/// Importing this module brings into scope the most common types
/// needed to declare and show a menu.
///
/// ```rust
/// use shellmenu::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::builder::MenuBuilder;
    pub use crate::core::error::MenuError;
    pub use crate::core::ids::{IdGenerator, SequentialIds, UuidGenerator};
    pub use crate::core::item::{
        CheckboxItem, MenuItem, NormalItem, Placement, RadioItem, RoleItem, SeparatorItem,
        ShareItem, SubmenuItem,
    };
    pub use crate::core::role::MenuRole;
    pub use crate::core::template::{build_template, MenuItemRecord};
    pub use crate::core::wire::{ClickInfo, HideRequest, Position, ShowRequest, ShowResponse};

    pub use crate::client::{
        AnchorHook, ApplicationMenu, ApplicationMenuHost, ContextMenu, ContextMenuEvent,
        LinkProbe, MenuEventKind, MenuTransport, ShowError, TransportError,
    };
}
