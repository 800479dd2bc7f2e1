// src/domain/transfer.rs
//
// Moving a listing reference from a draggable card into the favorites collector.
// Only the identifier travels; the collector resolves it against the catalog.

use crate::catalog::ListingCatalog;
use crate::domain::favorites::FavoritesStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Property,
    /// Anything else dragged over the page: files, text, links.
    Foreign,
}

impl TransferKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransferKind::Property => "PROPERTY",
            TransferKind::Foreign => "FOREIGN",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "PROPERTY" => TransferKind::Property,
            _ => TransferKind::Foreign,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPayload {
    pub kind: TransferKind,
    pub listing_id: String,
}

impl TransferPayload {
    pub fn property(listing_id: impl Into<String>) -> Self {
        Self {
            kind: TransferKind::Property,
            listing_id: listing_id.into(),
        }
    }
}

/// The draggable side. `active` is presentation-only; in the browser `app.js` dims the
/// card for the same span.
#[derive(Debug, Clone)]
pub struct DragSource {
    payload: TransferPayload,
    active: bool,
}

impl DragSource {
    pub fn new(payload: TransferPayload) -> Self {
        Self {
            payload,
            active: false,
        }
    }

    pub fn for_listing(listing_id: impl Into<String>) -> Self {
        Self::new(TransferPayload::property(listing_id))
    }

    pub fn payload(&self) -> &TransferPayload {
        &self.payload
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts a drag and hands out a copy of the payload.
    pub fn begin(&mut self) -> TransferPayload {
        self.active = true;
        self.payload.clone()
    }

    /// Drag finished, whether it was dropped or abandoned.
    pub fn end(&mut self) {
        self.active = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectorState {
    #[default]
    Idle,
    /// An accepted payload is over the collector.
    Hovering,
    /// A payload of another kind is over the collector.
    Rejecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    Added,
    AlreadySaved,
    /// The id did not resolve to a catalog entry; nothing changed.
    Unresolved,
    /// Wrong payload kind; nothing changed.
    Rejected,
}

/// The drop side, in front of the favorites store.
#[derive(Debug, Clone)]
pub struct DropCollector {
    accepts: TransferKind,
    state: CollectorState,
}

impl Default for DropCollector {
    fn default() -> Self {
        Self::new(TransferKind::Property)
    }
}

impl DropCollector {
    pub fn new(accepts: TransferKind) -> Self {
        Self {
            accepts,
            state: CollectorState::Idle,
        }
    }

    pub fn accepts(&self) -> TransferKind {
        self.accepts
    }

    pub fn state(&self) -> CollectorState {
        self.state
    }

    pub fn hover_enter(&mut self, payload: &TransferPayload) -> CollectorState {
        self.state = if payload.kind == self.accepts {
            CollectorState::Hovering
        } else {
            CollectorState::Rejecting
        };
        self.state
    }

    pub fn hover_leave(&mut self) {
        self.state = CollectorState::Idle;
    }

    /// Drag cancelled before a drop. The store is never touched.
    pub fn abandon(&mut self) {
        self.state = CollectorState::Idle;
    }

    /// Completes a drop: resolve the id against `catalog` and forward the record
    /// to `favorites`. Unknown ids are dropped silently.
    pub fn complete(
        &mut self,
        payload: TransferPayload,
        catalog: &ListingCatalog,
        favorites: &mut FavoritesStore,
    ) -> TransferOutcome {
        self.state = CollectorState::Idle;

        if payload.kind != self.accepts {
            return TransferOutcome::Rejected;
        }

        let Some(listing) = catalog.get(&payload.listing_id) else {
            tracing::debug!(id = %payload.listing_id, "transfer dropped: id not in catalog");
            return TransferOutcome::Unresolved;
        };

        if favorites.add(listing.clone()) {
            TransferOutcome::Added
        } else {
            TransferOutcome::AlreadySaved
        }
    }
}
