use serde::Deserialize;
use serde_json::Value;

// catalog
//  └── properties[]
//       ├── id
//       ├── type
//       ├── price
//       ├── location
//       ├── bedrooms
//       ├── tenure
//       ├── description
//       ├── picture
//       └── added
//            ├── year
//            ├── month   (English month name)
//            └── day

/// Records are kept as untyped JSON until each one is decoded on its own.
#[derive(Debug, Deserialize)]
pub struct RawCatalog {
    pub properties: Vec<Value>,
}

/// Loosely-typed record as it sits in the data file. Every field is optional here so
/// one bad record can be quarantined without failing the whole file.
#[derive(Debug, Default, Deserialize)]
pub struct RawListing {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub price: Option<i64>,
    pub location: Option<String>,
    pub bedrooms: Option<i64>,
    pub tenure: Option<String>,
    pub description: Option<String>,
    pub picture: Option<String>,
    pub added: Option<RawAddedDate>,
}

#[derive(Debug, Deserialize)]
pub struct RawAddedDate {
    pub year: i32,
    pub month: String,
    pub day: u32,
}
