pub mod property;
pub mod search;

pub use property::property_page;
pub use search::search_page;
