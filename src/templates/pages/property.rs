// templates/pages/property.rs

use crate::assets::{asset_url, floor_plan_path, map_embed_url};
use crate::domain::{GallerySelector, Listing};
use crate::templates::card;
use crate::templates::components::format::{format_added, format_price};
use crate::templates::desktop_layout;
use maud::{html, Markup};
use url::form_urlencoded::byte_serialize;

fn select_link(listing_id: &str, path: &str) -> String {
    let encoded: String = byte_serialize(path.as_bytes()).collect();
    format!("/property/{listing_id}?image={encoded}")
}

/// `app.js` reports failed loads back to the server so the image is dropped from
/// the gallery.
fn gallery_image(listing_id: &str, path: &str, asset_base: &str, alt: &str) -> Markup {
    html! {
        img src=(asset_url(asset_base, path))
            alt=(alt)
            data-listing-id=(listing_id)
            data-image-path=(path)
            onerror="estateImageFailed(this)";
    }
}

pub fn property_page(listing: &Listing, gallery: &GallerySelector, asset_base: &str) -> Markup {
    let title = format!("{} in {}", listing.listing_type.as_str(), listing.location);

    desktop_layout(
        &title,
        html! {
            main class="container property-details" {
                p { a href="/" { "← Back to Search" } }

                h1 { (title) }
                p class="price" { (format_price(listing.price)) }
                ul class="facts" {
                    li { (listing.bedrooms) " Bedrooms" }
                    li { (listing.tenure) }
                    li { "Added " (format_added(listing.added)) }
                }

                div class="gallery" {
                    div class="gallery-main" {
                        @if gallery.selected_is_available() {
                            (gallery_image(&listing.id, gallery.selected(), asset_base, "Selected view"))
                        } @else {
                            div class="image-fallback" { "Image unavailable" }
                        }
                    }

                    div class="gallery-thumbs" {
                        @for path in gallery.visible_candidates() {
                            a.thumb.selected[path == gallery.selected()]
                                href=(select_link(&listing.id, path))
                            {
                                (gallery_image(&listing.id, path, asset_base, "Thumbnail"))
                            }
                        }
                    }
                }

                (card("Description", html! {
                    p { (listing.description) }
                }))

                (card("Floor Plan", html! {
                    img class="floor-plan"
                        src=(asset_url(asset_base, &floor_plan_path(&listing.id)))
                        alt="Floor plan"
                        onerror="this.hidden = true";
                }))

                (card("Location", html! {
                    iframe class="map" title="Map" loading="lazy"
                        src=(map_embed_url(&listing.location)) {}
                }))
            }
        },
    )
}
