pub mod files;
pub mod html;

pub use files::file_response;
pub use html::{html_response, no_content, redirect};
