use maud::{html, Markup};

pub mod error;
pub mod favorites_panel;
pub mod format;
pub mod listing_card;
pub mod search_form;

pub use error::html_error_response;
pub use favorites_panel::favorites_panel;
pub use listing_card::listing_card;
pub use search_form::search_form;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
