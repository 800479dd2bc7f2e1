use crate::domain::{
    DragSource, FilterCriteria, GallerySelector, TransferKind, TransferPayload, TypeFilter,
};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{file_response, html_response, no_content, redirect};
use crate::state::AppState;
use crate::templates;
use astra::Request;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            // Leaving the detail view ends its gallery.
            state.gallery()?.take();
            let session = state.session()?;
            html_response(templates::pages::search_page(
                &session,
                &state.config.asset_base_url,
            ))
        }

        ("POST", "/search") => {
            let form = read_form(&mut req)?;
            let mut session = state.session()?;
            let defaults = FilterCriteria::defaults_for(session.catalog());
            session.set_draft(criteria_from_form(&form, &defaults)?);
            session.search();
            redirect("/")
        }

        ("POST", "/search/clear") => {
            state.session()?.clear();
            redirect("/")
        }

        ("POST", "/favorites/drop") => {
            let form = read_form(&mut req)?;
            let id = required(&form, "id")?;
            let kind = form.get("kind").map(String::as_str).unwrap_or_default();
            let mut source = DragSource::new(TransferPayload {
                kind: TransferKind::parse(kind),
                listing_id: id.to_string(),
            });
            let payload = source.begin();

            let mut session = state.session()?;
            session.collector_mut().hover_enter(&payload);
            session.transfer(payload);
            source.end();
            debug_assert!(!source.is_active());
            redirect("/")
        }

        ("POST", "/favorites/remove") => {
            let form = read_form(&mut req)?;
            let id = required(&form, "id")?;
            state.session()?.favorites_mut().remove(id);
            redirect("/")
        }

        ("POST", "/favorites/clear") => {
            state.session()?.favorites_mut().clear();
            redirect("/")
        }

        ("GET", p) if p.starts_with("/static/") || p.starts_with("/images/") => {
            file_response(&state.config.public_dir, p)
        }

        (m, p) => match p.strip_prefix("/property/") {
            Some(rest) => property_route(m, rest, &mut req, &query, state),
            None => Err(ServerError::NotFound),
        },
    }
}

fn property_route(
    method: &str,
    rest: &str,
    req: &mut Request,
    query: &HashMap<String, String>,
    state: &AppState,
) -> ResultResp {
    match (method, rest.split_once('/')) {
        ("GET", None) => {
            let listing = state.catalog.get(rest).ok_or(ServerError::NotFound)?;

            let mut slot = state.gallery()?;
            let reuse = slot
                .as_ref()
                .is_some_and(|g| g.listing_id() == listing.id);
            if !reuse {
                *slot = Some(GallerySelector::new(
                    listing,
                    state.config.gallery_variants,
                ));
            }
            let gallery = slot.as_mut().ok_or(ServerError::InternalError)?;

            if let Some(image) = query.get("image") {
                if let Err(e) = gallery.select(image) {
                    tracing::debug!(id = %listing.id, error = %e, "gallery selection refused");
                }
            }

            html_response(templates::pages::property_page(
                listing,
                gallery,
                &state.config.asset_base_url,
            ))
        }

        ("POST", Some((id, "unavailable"))) => {
            let form = read_form(req)?;
            let image = required(&form, "path")?;

            let mut slot = state.gallery()?;
            if let Some(gallery) = slot.as_mut().filter(|g| g.listing_id() == id) {
                if gallery.mark_unavailable(image) {
                    tracing::info!(%id, path = %image, "gallery image unavailable");
                }
            }
            no_content()
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Builds a complete criteria set from the submitted search form. Missing or blank
/// fields fall back to `defaults`; anything that doesn't parse is rejected here so
/// the filter engine only sees typed values.
pub fn criteria_from_form(
    form: &HashMap<String, String>,
    defaults: &FilterCriteria,
) -> Result<FilterCriteria, ServerError> {
    let listing_type = match field(form, "type") {
        Some(value) => TypeFilter::parse(value)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown property type '{value}'")))?,
        None => defaults.listing_type,
    };

    Ok(FilterCriteria {
        listing_type,
        min_price: number(form, "min_price", defaults.min_price)?,
        max_price: number(form, "max_price", defaults.max_price)?,
        min_bedrooms: number(form, "min_bedrooms", defaults.min_bedrooms)?,
        max_bedrooms: number(form, "max_bedrooms", defaults.max_bedrooms)?,
        location: form.get("location").cloned().unwrap_or_default(),
        added_from: date(form, "added_from")?,
        added_to: date(form, "added_to")?,
    })
}

/// Non-blank value of a form field.
fn field<'a>(form: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    form.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn required<'a>(form: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ServerError> {
    field(form, name).ok_or_else(|| ServerError::BadRequest(format!("missing {name}")))
}

fn number<T: FromStr>(
    form: &HashMap<String, String>,
    name: &str,
    default: T,
) -> Result<T, ServerError> {
    match field(form, name) {
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("{name} must be a whole number"))),
        None => Ok(default),
    }
}

fn date(form: &HashMap<String, String>, name: &str) -> Result<Option<NaiveDate>, ServerError> {
    field(form, name)
        .map(|value| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map_err(|_| ServerError::BadRequest(format!("{name} must be a YYYY-MM-DD date")))
        })
        .transpose()
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
