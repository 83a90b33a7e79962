use crate::search::SearchState;
use crate::templates::components::{filter_form, results_panel, ResultsView};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full results page: the filter form plus the first render of `#results`.
pub fn search_page(state: &SearchState, view_id: &str, view: ResultsView<'_>) -> Markup {
    let title = match state.filters.value(crate::search::FilterKey::Location) {
        Some(loc) => format!("Rentals in {loc}"),
        None => "Browse rentals".to_string(),
    };

    desktop_layout(
        &title,
        html! {
            h1 { (title) }
            (filter_form(state, view_id))
            section id="results" aria-live="polite" {
                (results_panel(state, view))
            }
        },
    )
}

/// Just the inside of `#results`, for htmx swaps.
pub fn results_fragment(state: &SearchState, view: ResultsView<'_>) -> Markup {
    results_panel(state, view)
}
