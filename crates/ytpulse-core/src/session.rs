//! Single-slot, session-scoped cache for the most recent fetch.
//!
//! A session is one interactive run of the tool. The store holds at most one
//! [`CollectionResult`]; every `set` replaces whatever was there, and nothing
//! is ever merged or appended. Writes take `&mut self`, so a store shared
//! across tasks must be wrapped by its owner (one store per session key).

use crate::records::{Record, SourceKind};

/// Ordered records from one completed fetch.
pub type CollectionResult = Vec<Record>;

/// Where the stored result came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOrigin {
    pub kind: SourceKind,
    pub collection_id: String,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    slot: Option<(SessionOrigin, CollectionResult)>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored records, if any.
    #[must_use]
    pub fn get(&self) -> Option<&CollectionResult> {
        self.slot.as_ref().map(|(_, records)| records)
    }

    /// Returns where the stored records came from, if any.
    #[must_use]
    pub fn get_origin(&self) -> Option<&SessionOrigin> {
        self.slot.as_ref().map(|(origin, _)| origin)
    }

    /// Replaces the stored result unconditionally.
    pub fn set(&mut self, origin: SessionOrigin, records: CollectionResult) {
        self.slot = Some((origin, records));
    }

    /// Drops the stored result, returning the store to its initial state.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
