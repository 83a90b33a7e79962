use crate::api::{FetchError, ListingPage};
use crate::app::AppState;
use crate::auth::CookieToken;
use crate::domain::listing::{is_linkable_id, DEFAULT_PLACEHOLDER_IMAGE};
use crate::errors::ServerError;
use crate::responses::{
    fragment_response, html_response, no_swap_response, text_response, ResultResp,
};
use crate::search::{new_view_id, FilterKey, Params, SearchState};
use crate::templates::components::ResultsView;
use crate::templates::pages;
use astra::Request;
use maud::Markup;
use std::io::Read;

const MAIN_CSS: &str = include_str!("../static/main.css");
const PLACEHOLDER_SVG: &str = include_str!("../static/images/placeholder-property.svg");
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(mut req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let _span = tracing::debug_span!("request", %method, %path).entered();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),
        ("GET", "/health") => text_response("text/plain; charset=utf-8", "ok"),
        ("GET", "/static/main.css") => text_response("text/css; charset=utf-8", MAIN_CSS),
        ("GET", DEFAULT_PLACEHOLDER_IMAGE) => text_response("image/svg+xml", PLACEHOLDER_SVG),

        ("GET", "/properties") => show_results_page(&req, app),
        ("POST", "/properties") => submit_results_page(&mut req, app),
        ("POST", "/properties/results") => refresh_results(&mut req, app),
        ("GET", p) if p.starts_with("/properties/") => {
            show_property(&req, app, &p["/properties/".len()..])
        }

        _ => Err(ServerError::NotFound),
    }
}

/// First load: only `search` and `location` come from the URL.
fn show_results_page(req: &Request, app: &AppState) -> ResultResp {
    let params = Params::from_query(req.uri().query());
    let mut state = SearchState::from_url_params(&params);
    let creds = CookieToken::from_request(req, app.service_credentials.as_ref());

    let outcome = load_results(app, &mut state, &creds);
    html_response(render_page(&mut state, &new_view_id(), &outcome))
}

/// Plain form submit (no JavaScript): a new search, so back to page one.
fn submit_results_page(req: &mut Request, app: &AppState) -> ResultResp {
    let creds = CookieToken::from_request(req, app.service_credentials.as_ref());
    let form = read_form(req)?;

    let mut state = SearchState::from_form(&form);
    state.pagination.reset();

    let view_id = form
        .get("view_id")
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(new_view_id);

    let outcome = load_results(app, &mut state, &creds);
    html_response(render_page(&mut state, &view_id, &outcome))
}

/// htmx refresh of `#results`. The form carries the full state; the element
/// that fired the request (HX-Trigger-Name) tells us whether a filter changed.
fn refresh_results(req: &mut Request, app: &AppState) -> ResultResp {
    let creds = CookieToken::from_request(req, app.service_credentials.as_ref());
    let trigger = req
        .headers()
        .get("HX-Trigger-Name")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let form = read_form(req)?;

    let mut state = SearchState::from_form(&form);
    if let Some(key) = trigger.as_deref().and_then(FilterKey::from_form_name) {
        let value = form.get(key.form_name()).unwrap_or("");
        tracing::debug!(filter = key.form_name(), value, "filter changed");
        state.set_filter(key, value);
    }

    let ticket = form
        .get("view_id")
        .filter(|v| !v.is_empty())
        .map(|id| app.views.begin(id));

    let outcome = load_results(app, &mut state, &creds);

    if let Some(ticket) = &ticket {
        if !app.views.is_latest(ticket) {
            tracing::debug!(view_id = %ticket.view_id, seq = ticket.seq, "dropping superseded results");
            return no_swap_response();
        }
    }

    let markup = render_fragment(&mut state, &outcome);
    fragment_response(markup, &[("HX-Replace-Url", state.shareable_url())])
}

fn show_property(req: &Request, app: &AppState, id: &str) -> ResultResp {
    if !is_linkable_id(id) {
        return Err(ServerError::NotFound);
    }
    let creds = CookieToken::from_request(req, app.service_credentials.as_ref());

    let listing = app.api.fetch_listing(id, &creds).map_err(|e| {
        tracing::warn!(
            id,
            error = %e,
            status = ?e.status(),
            cause = e.cause().unwrap_or(""),
            "property lookup failed"
        );
        ServerError::from(e)
    })?;

    html_response(pages::property_page(&listing))
}

/// Fetch the page `state` asks for. A page past the end (the result set shrank
/// since the form was rendered) is retried once as the last page.
fn load_results(
    app: &AppState,
    state: &mut SearchState,
    creds: &CookieToken<'_>,
) -> Result<ListingPage, FetchError> {
    let requested = state.pagination.current_page();
    let mut result = fetch_page(app, state, creds);

    let past_end = match &result {
        Ok(page)
            if page.items.is_empty()
                && page.pagination.total_items > 0
                && requested > page.pagination.total_pages() =>
        {
            Some(page.pagination)
        }
        _ => None,
    };

    if let Some(reported) = past_end {
        state.apply_pagination(reported);
        state.go_to_page(requested);
        tracing::debug!(
            requested,
            last = state.pagination.current_page(),
            "requested page is past the end, loading the last page"
        );
        result = fetch_page(app, state, creds);
    }
    result
}

fn fetch_page(
    app: &AppState,
    state: &SearchState,
    creds: &CookieToken<'_>,
) -> Result<ListingPage, FetchError> {
    let result = app
        .api
        .fetch_listings(&state.filters, &state.pagination, creds);
    if let Err(e) = &result {
        tracing::warn!(
            error = %e,
            status = ?e.status(),
            cause = e.cause().unwrap_or(""),
            page = state.pagination.current_page(),
            "listings fetch failed"
        );
    }
    result
}

fn render_page(state: &mut SearchState, view_id: &str, outcome: &Result<ListingPage, FetchError>) -> Markup {
    match outcome {
        Ok(page) => {
            state.apply_pagination(page.pagination);
            pages::search_page(state, view_id, ResultsView::Loaded(&page.items))
        }
        Err(e) => pages::search_page(state, view_id, ResultsView::Failed(&e.message())),
    }
}

fn render_fragment(state: &mut SearchState, outcome: &Result<ListingPage, FetchError>) -> Markup {
    match outcome {
        Ok(page) => {
            state.apply_pagination(page.pagination);
            pages::results_fragment(state, ResultsView::Loaded(&page.items))
        }
        Err(e) => pages::results_fragment(state, ResultsView::Failed(&e.message())),
    }
}

fn read_form(req: &mut Request) -> Result<Params, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(Params::parse(&body))
}
