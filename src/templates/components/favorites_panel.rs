use crate::domain::{CollectorState, DropCollector, FavoritesStore};
use crate::templates::components::format::format_price;
use maud::{html, Markup};

fn state_class(state: CollectorState) -> &'static str {
    match state {
        CollectorState::Idle => "idle",
        CollectorState::Hovering => "hovering",
        CollectorState::Rejecting => "rejecting",
    }
}

/// The drop target sidebar. `static/app.js` toggles the hover classes while a card is
/// dragged and submits `#drop-form` on drop.
pub fn favorites_panel(favorites: &FavoritesStore, collector: &DropCollector) -> Markup {
    html! {
        aside id="favorites"
            class={ "favorites-drop " (state_class(collector.state())) }
            data-accepts=(collector.accepts().as_str())
        {
            h3 { "Favorites (" (favorites.len()) ")" }
            p class="muted small" { "Drag properties here to save" }

            form id="drop-form" method="post" action="/favorites/drop" hidden {
                input type="hidden" name="kind" value="";
                input type="hidden" name="id" value="";
            }

            @if favorites.is_empty() {
                p { "No favorites yet." }
            } @else {
                ul class="favorites-list" {
                    @for fav in favorites.listings() {
                        li {
                            a href={ "/property/" (fav.id) } {
                                strong { (fav.listing_type.as_str()) }
                                br;
                                (format_price(fav.price))
                            }
                            form method="post" action="/favorites/remove" class="inline" {
                                input type="hidden" name="id" value=(fav.id);
                                button type="submit" class="btn-remove" title="Remove" { "✕" }
                            }
                        }
                    }
                }

                form method="post" action="/favorites/clear" {
                    button type="submit" class="btn-clear-all" { "Clear All" }
                }
            }
        }
    }
}
