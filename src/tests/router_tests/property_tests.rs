// src/tests/router_tests/property_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post, test_state};

#[test]
fn detail_page_shows_listing_gallery_and_map() {
    let state = test_state();

    let resp = handle(get("/property/prop1"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("House in Colombo 07, Western Province"));
    assert!(body.contains("Rs. 185,000,000"));
    assert!(body.contains("Added 12 October 2022"));
    assert!(body.contains("/images/prop1/pic3.jpg"));
    assert!(!body.contains("/images/prop1/pic4.jpg"));
    assert!(body.contains("/images/prop1/floorplan.jpg"));
    assert!(body.contains("https://maps.google.com/maps?q=Colombo+07%2C+Western+Province&amp;output=embed"));

    let gallery = state.gallery().unwrap();
    assert_eq!(gallery.as_ref().map(|g| g.selected()), Some("images/prop1/main.jpg"));
}

#[test]
fn unknown_listing_is_not_found() {
    let state = test_state();
    assert!(matches!(
        handle(get("/property/nope"), &state),
        Err(ServerError::NotFound)
    ));
    assert!(state.gallery().unwrap().is_none());
}

#[test]
fn image_query_selects_gallery_image() {
    let state = test_state();

    handle(get("/property/prop2"), &state).unwrap();
    handle(get("/property/prop2?image=images%2Fprop2%2Fpic2.jpg"), &state).unwrap();
    assert_eq!(
        state.gallery().unwrap().as_ref().map(|g| g.selected().to_string()),
        Some("images/prop2/pic2.jpg".to_string())
    );

    // Not an image of this listing: selection stays put.
    handle(get("/property/prop2?image=images%2Fprop1%2Fpic1.jpg"), &state).unwrap();
    assert_eq!(
        state.gallery().unwrap().as_ref().map(|g| g.selected().to_string()),
        Some("images/prop2/pic2.jpg".to_string())
    );
}

#[test]
fn unavailable_image_is_hidden_and_falls_back() {
    let state = test_state();
    handle(get("/property/prop3?image=images%2Fprop3%2Fpic1.jpg"), &state).unwrap();

    let resp = handle(
        post("/property/prop3/unavailable", "path=images%2Fprop3%2Fpic1.jpg"),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 204);

    let body = body_string(handle(get("/property/prop3"), &state).unwrap());
    assert!(body.contains("Image unavailable"));
    assert!(!body.contains("/images/prop3/pic1.jpg"));
    assert!(body.contains("/images/prop3/pic2.jpg"));
}

#[test]
fn unavailable_report_for_other_listing_is_ignored() {
    let state = test_state();
    handle(get("/property/prop1"), &state).unwrap();

    handle(
        post("/property/prop2/unavailable", "path=images%2Fprop2%2Fmain.jpg"),
        &state,
    )
    .unwrap();

    let gallery = state.gallery().unwrap();
    let gallery = gallery.as_ref().unwrap();
    assert_eq!(gallery.listing_id(), "prop1");
    assert_eq!(gallery.visible_candidates().count(), 4);
}

#[test]
fn opening_another_listing_or_search_discards_gallery() {
    let state = test_state();
    handle(get("/property/prop1?image=images%2Fprop1%2Fpic1.jpg"), &state).unwrap();

    handle(get("/property/prop2"), &state).unwrap();
    assert_eq!(
        state.gallery().unwrap().as_ref().map(|g| g.listing_id().to_string()),
        Some("prop2".to_string())
    );

    handle(get("/"), &state).unwrap();
    assert!(state.gallery().unwrap().is_none());
}

#[test]
fn static_files_are_served_from_public_dir() {
    let state = test_state();
    let dir = state.config.public_dir.join("static");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("main.css"), "body { margin: 0 }").unwrap();

    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("text/css")
    );
    assert_eq!(body_string(resp), "body { margin: 0 }");

    let images = state.config.public_dir.join("images");
    std::fs::create_dir_all(&images).unwrap();
    std::fs::write(images.join("a.webp"), [0u8; 4]).unwrap();
    std::fs::write(images.join("favicon.ico"), [0u8; 4]).unwrap();

    for (uri, expected) in [
        ("/images/a.webp", "image/webp"),
        ("/images/favicon.ico", "image/x-icon"),
    ] {
        let resp = handle(get(uri), &state).unwrap();
        assert_eq!(
            resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
            Some(expected)
        );
    }

    assert!(matches!(
        handle(get("/images/prop1/missing.jpg"), &state),
        Err(ServerError::NotFound)
    ));
}
