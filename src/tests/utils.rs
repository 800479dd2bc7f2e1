use crate::catalog::loader::parse_catalog;
use crate::config::Config;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::ops::Deref;
use tempfile::TempDir;

pub const FIXTURE_CATALOG: &str = r#"{
  "properties": [
    {
      "id": "prop1", "type": "House", "price": 185000000,
      "location": "Colombo 07, Western Province", "bedrooms": 3, "tenure": "Freehold",
      "description": "A lovely family home close to schools, parks and the city centre, with a large garden.",
      "picture": "images/prop1/main.jpg",
      "added": { "year": 2022, "month": "October", "day": 12 }
    },
    {
      "id": "prop2", "type": "Flat", "price": 42000000,
      "location": "Kandy, Central Province", "bedrooms": 2, "tenure": "Leasehold",
      "description": "Hill views.",
      "picture": "images/prop2/main.jpg",
      "added": { "year": 2023, "month": "March", "day": 9 }
    },
    {
      "id": "prop3", "type": "House", "price": 95000000,
      "location": "Galle Fort, Southern Province", "bedrooms": 4, "tenure": "Freehold",
      "description": "Colonial villa inside the fort walls.",
      "picture": "images/prop3/main.jpg",
      "added": { "year": 2021, "month": "June", "day": 1 }
    }
  ]
}"#;

/// Application state over the fixture catalog, plus the scratch public directory it
/// serves from. The directory is removed when this is dropped.
pub struct TestState {
    state: AppState,
    _public_dir: TempDir,
}

impl Deref for TestState {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.state
    }
}

pub fn test_state() -> TestState {
    test_state_with(FIXTURE_CATALOG)
}

pub fn test_state_with(catalog_json: &str) -> TestState {
    let (catalog, report) = parse_catalog(catalog_json)
        .unwrap_or_else(|e| panic!("Fixture catalog failed to parse: {e}"));
    assert!(report.quarantined.is_empty());

    let public_dir = tempfile::Builder::new()
        .prefix("estate_public")
        .tempdir()
        .unwrap();

    let config = Config {
        public_dir: public_dir.path().to_path_buf(),
        gallery_variants: 3,
        ..Config::default()
    };

    TestState {
        state: AppState::new(config, catalog),
        _public_dir: public_dir,
    }
}

pub fn request(method: Method, uri: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    if !body.is_empty() {
        req.headers_mut().insert(
            "Content-Type",
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
    }
    req
}

pub fn get(uri: &str) -> Request {
    request(Method::GET, uri, "")
}

pub fn post(uri: &str, body: &str) -> Request {
    request(Method::POST, uri, body)
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
