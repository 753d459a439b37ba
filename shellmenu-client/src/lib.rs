//! Protocol runtime for shellmenu.
//!
//! Builds on the model types from `shellmenu-core` and adds the process-local
//! side of the menu protocol: [`ContextMenu`] and [`ApplicationMenu`] own an
//! item tree, keep its transport template and click registry in sync, and run
//! the show/click/hide round trip against a [`MenuTransport`] the embedding
//! shell provides.

pub mod event;
pub mod menu;
pub mod transport;

pub use event::{ContextMenuEvent, MenuEventKind, MenuEventListener};
pub use menu::{ApplicationMenu, ContextMenu, ShowError};
pub use transport::{AnchorHook, ApplicationMenuHost, LinkProbe, MenuTransport, TransportError};
