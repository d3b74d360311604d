//! Media catalog lookup trait

use crate::error::Result;
use crate::types::PreparedMedia;

/// Maps item identifiers to playable metadata
///
/// The catalog is the authoritative source for display metadata and the
/// source locator; queue descriptors are only what the control surface
/// happened to send.
pub trait CatalogLookup: Send {
    /// Resolve an item identifier to playable metadata
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownItem`](crate::SessionError::UnknownItem)
    /// if the identifier is not in the catalog.
    fn resolve(&self, item_id: &str) -> Result<PreparedMedia>;
}
