// responses/files.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Serve `request_path` (e.g. "/images/prop1/main.jpg") from under `root`.
pub fn file_response(root: &Path, request_path: &str) -> ResultResp {
    let path = resolve(root, request_path).ok_or(ServerError::NotFound)?;

    let bytes = fs::read(&path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "static file not served");
        ServerError::NotFound
    })?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type(&path).as_ref())
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}

/// Only plain relative components are allowed, so the result never leaves `root`.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    let mut out = root.to_path_buf();

    for component in relative.components() {
        match component {
            Component::Normal(part) => out.push(part),
            _ => return None,
        }
    }

    if out == root {
        return None;
    }
    Some(out)
}

fn content_type(path: &Path) -> Mime {
    mime_guess::from_path(path).first_or_octet_stream()
}
