//! Construction and build faults.

use thiserror::Error;

/// A fault in the declared menu tree. These surface synchronously from
/// `build()`; a broken tree is never shipped to the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// Two items in the same menu tree share a non-empty id.
    #[error("duplicate menu item id `{id}` in menu tree")]
    DuplicateId { id: String },

    /// A share item references nothing.
    #[error("a share item must have at least one file path, text, or URL")]
    EmptyShare,
}
