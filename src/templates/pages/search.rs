// templates/pages/search.rs

use crate::domain::criteria::DEFAULT_MAX_PRICE;
use crate::session::SearchSession;
use crate::templates::components::{favorites_panel, listing_card, search_form};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn search_page(session: &SearchSession, asset_base: &str) -> Markup {
    let catalog = session.catalog();
    let draft = session.draft();
    let results = session.results();
    let favorites = session.favorites();

    let price_ceiling = catalog
        .price_bounds()
        .map(|(_, max)| max)
        .unwrap_or(0)
        .max(DEFAULT_MAX_PRICE)
        .max(draft.max_price);

    desktop_layout(
        "Search",
        html! {
            main class="container" {
                h1 { "Find Your Dream Home in Sri Lanka" }

                (search_form(draft, price_ceiling))

                @if session.has_searched() {
                    p class="result-count" {
                        "Showing " strong { (results.len()) } " of " (catalog.len()) " properties."
                    }
                }

                div class="search-layout" {
                    div class="property-grid" {
                        @if results.is_empty() {
                            div class="no-results" {
                                h3 { "No properties found matching your criteria." }
                                p { "Try adjusting your price range or location." }
                            }
                        } @else {
                            @for listing in results {
                                (listing_card(listing, asset_base, favorites.contains(&listing.id)))
                            }
                        }
                    }

                    div {
                        (favorites_panel(favorites, session.collector()))
                    }
                }
            }
        },
    )
}
