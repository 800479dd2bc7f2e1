use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(
            404,
            "Not Found",
            "We couldn't find that property. It may have been removed from the catalog.",
        ),

        ServerError::BadRequest(msg) => render_error(400, "Bad Request", &msg),

        ServerError::InternalError => render_error(500, "Internal Server Error", "Please try again."),
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, title: &str, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container error-page" {
                h1 { "Error " (status) ": " (title) }
                p { (message) }
                p { a href="/" { "← Back to search" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
