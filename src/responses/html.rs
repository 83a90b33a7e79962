use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// An htmx partial, with extra response headers (`HX-Replace-Url`, ...).
pub fn fragment_response(markup: Markup, headers: &[(&str, String)]) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref());

    for (name, value) in headers {
        builder = builder.header(*name, value.as_str());
    }

    builder
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Tells htmx to leave the page alone: nothing is swapped on a 204.
pub fn no_swap_response() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .header("HX-Reswap", "none")
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

pub fn text_response(content_type: &str, body: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
