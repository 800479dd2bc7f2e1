use crate::assets::asset_url;
use crate::domain::{DragSource, Listing};
use crate::templates::components::format::{excerpt, format_price};
use maud::{html, Markup};

const DESCRIPTION_PREVIEW_CHARS: usize = 80;

/// A draggable result card. The drag payload is carried in data attributes; the
/// "Save" form posts the same payload for browsers without drag and drop.
pub fn listing_card(listing: &Listing, asset_base: &str, saved: bool) -> Markup {
    let source = DragSource::for_listing(&listing.id);
    let payload = source.payload();

    html! {
        div class="property-card"
            draggable="true"
            data-kind=(payload.kind.as_str())
            data-listing-id=(payload.listing_id)
        {
            img src=(asset_url(asset_base, &listing.picture)) alt=(listing.listing_type.as_str());
            div class="property-card-body" {
                h3 { (listing.listing_type.as_str()) " - " (format_price(listing.price)) }
                p class="muted" { (listing.location) }
                p { (listing.bedrooms) " Bedrooms" }
                p class="description" { (excerpt(&listing.description, DESCRIPTION_PREVIEW_CHARS)) }

                div class="card-actions" {
                    a class="btn-view" href={ "/property/" (listing.id) } { "View Details →" }

                    @if saved {
                        span class="saved-badge" { "Saved" }
                    } @else {
                        form method="post" action="/favorites/drop" class="inline" {
                            input type="hidden" name="kind" value=(payload.kind.as_str());
                            input type="hidden" name="id" value=(payload.listing_id);
                            button type="submit" class="btn-save" { "Save" }
                        }
                    }
                }
            }
        }
    }
}
