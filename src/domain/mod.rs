pub mod criteria;
pub mod favorites;
pub mod filter;
pub mod gallery;
pub mod listing;
pub mod transfer;

pub use criteria::{FilterCriteria, TypeFilter};
pub use favorites::FavoritesStore;
pub use gallery::GallerySelector;
pub use listing::{Listing, ListingType};
pub use transfer::{CollectorState, DragSource, DropCollector, TransferKind, TransferOutcome, TransferPayload};
