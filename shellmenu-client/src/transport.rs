//! Collaborator seams.
//!
//! The privileged process that owns native menu APIs is reached through
//! [`MenuTransport`]; the environment capabilities a context menu leans on
//! (hit-testing for link URLs, DOM-style anchoring) are narrow traits the
//! embedding shell implements. This crate never talks to a message channel
//! directly.

use async_trait::async_trait;
use shellmenu_core::template::MenuItemRecord;
use shellmenu_core::wire::{HideRequest, ShowRequest, ShowResponse};
use thiserror::Error;

/// A failure in the request/response primitive itself. Host misbehavior
/// beyond this (never resolving, resolving twice) is a contract violation the
/// client does not defend against.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("menu transport channel closed")]
    Closed,
    #[error("menu transport failure: {0}")]
    Failed(String),
}

/// The host collaborator contract.
///
/// On `show` the host must close any popup already open for the same
/// `menu_id`, attach click routing to every clickable record keyed by id,
/// display the native menu, and resolve exactly once — with the clicked id,
/// or with `menu_item_id: None` when the popup closes without a selection.
/// `hide` asks it to proactively close the popup for a menu; the pending show
/// still resolves through its normal close callback.
#[async_trait]
pub trait MenuTransport: Send + Sync {
    async fn show(&self, request: ShowRequest) -> Result<ShowResponse, TransportError>;
    async fn hide(&self, request: HideRequest) -> Result<(), TransportError>;
}

/// Hit-testing capability: the topmost link URL under a client coordinate,
/// if any. Scanning short-circuits on the first anchor hit.
pub trait LinkProbe: Send + Sync {
    fn link_url_at(&self, x: f64, y: f64) -> Option<String>;
}

/// Attachment glue for context menus. The embedding shell wires its own
/// `contextmenu`-style interception and gets told when a menu claims or
/// releases an anchor, identified by the menu's name.
pub trait AnchorHook: Send + Sync {
    fn attached(&self, menu_name: &str);
    fn detached(&self, menu_name: &str);
}

/// Host seam for the persistent application menu bar: installs a built
/// template, replacing whatever menu was set before.
pub trait ApplicationMenuHost: Send + Sync {
    fn set_menu(&self, menu_id: &str, template: &[MenuItemRecord]) -> Result<(), TransportError>;
}
