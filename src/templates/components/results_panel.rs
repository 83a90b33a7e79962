use crate::domain::ListingViewModel;
use crate::search::SearchState;
use crate::templates::components::filter_form::page_input;
use crate::templates::components::listing_card::listing_results;
use crate::templates::components::pagination::pagination_nav;
use maud::{html, Markup};

use super::{RESULTS_ENDPOINT, RESULTS_TARGET, SEARCH_FORM, SEARCH_SYNC};

/// What the last listings fetch produced, as far as the page cares.
#[derive(Debug, Clone, Copy)]
pub enum ResultsView<'a> {
    Loaded(&'a [ListingViewModel]),
    Failed(&'a str),
}

/// The body of `#results`: error panel, empty state, or cards + pagination.
/// Also carries the out-of-band page field so the form stays in sync.
pub fn results_panel(state: &SearchState, view: ResultsView<'_>) -> Markup {
    let page = state.pagination.current_page();
    let found = match view {
        ResultsView::Loaded(items) => state.pagination.total_items.max(items.len()),
        ResultsView::Failed(_) => 0,
    };

    html! {
        (page_input(page, true))
        @match view {
            ResultsView::Failed(message) => (error_panel(message, page)),
            ResultsView::Loaded(items) if items.is_empty() => (empty_panel()),
            ResultsView::Loaded(items) => {
                p class="results-count" {
                    strong { (found) }
                    @if found == 1 { " property found" } @else { " properties found" }
                }
                (listing_results(items, state.display))
                (pagination_nav(&state.pagination))
            }
        }
    }
}

/// Full-panel error with a retry that re-posts exactly the same parameters.
fn error_panel(message: &str, page: usize) -> Markup {
    html! {
        div class="results-error" role="alert" {
            h3 { "Something went wrong" }
            p { (message) }
            button
                type="button"
                class="btn primary"
                hx-post=(RESULTS_ENDPOINT)
                hx-target=(RESULTS_TARGET)
                hx-include=(SEARCH_FORM)
                hx-sync=(SEARCH_SYNC)
                hx-vals=(format!(r#"{{"page": "{page}"}}"#))
            { "Try Again" }
        }
    }
}

fn empty_panel() -> Markup {
    html! {
        div class="results-empty" {
            h3 { "No properties found" }
            p { "Try a different search or loosen your filters." }
            a href="/properties" class="btn" { "Clear Search" }
        }
    }
}
