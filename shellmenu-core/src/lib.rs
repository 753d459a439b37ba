//! Core menu model for shellmenu.
//!
//! This crate holds everything both sides of the process boundary agree on:
//! the declarative item model and builder, the serializable transport
//! template, the wire payloads for the show/hide protocol, and the
//! identifier scheme that lets a click response find its way back to the
//! declaring item. Nothing here performs I/O; the protocol runtime lives in
//! `shellmenu-client`.

pub mod builder;
pub mod error;
pub mod ids;
pub mod item;
pub mod registry;
pub mod role;
pub mod template;
pub mod tree;
pub mod wire;

pub use builder::MenuBuilder;
pub use error::MenuError;
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use item::{
    CheckboxItem, ItemCommon, MenuItem, NormalItem, OnClick, Placement, RadioItem, RoleItem,
    SeparatorItem, ShareItem, SubmenuItem,
};
pub use registry::ClickRegistry;
pub use role::MenuRole;
pub use template::{build_template, ItemType, MenuItemRecord, SharingItem};
pub use wire::{ClickInfo, HideRequest, Position, ShowRequest, ShowResponse};
