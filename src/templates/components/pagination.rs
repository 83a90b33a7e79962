use crate::search::PaginationState;
use maud::{html, Markup};

use super::{RESULTS_ENDPOINT, RESULTS_TARGET, SEARCH_FORM, SEARCH_SYNC};

/// Previous / window of page numbers / Next. Buttons re-post the search form
/// with only the page changed.
pub fn pagination_nav(pagination: &PaginationState) -> Markup {
    let current = pagination.current_page();

    html! {
        @if pagination.total_pages() > 1 {
            nav class="pagination" aria-label="Results pages" {
                (page_button("Previous", current.saturating_sub(1), !pagination.has_previous(), false))
                @for page in pagination.visible_pages() {
                    (page_button(&page.to_string(), page, false, page == current))
                }
                (page_button("Next", current + 1, !pagination.has_next(), false))
            }
        }
    }
}

fn page_button(label: &str, page: usize, disabled: bool, is_current: bool) -> Markup {
    html! {
        button
            type="button"
            class=(if is_current { "page current" } else { "page" })
            aria-current=[is_current.then_some("page")]
            disabled[disabled]
            hx-post=(RESULTS_ENDPOINT)
            hx-target=(RESULTS_TARGET)
            hx-include=(SEARCH_FORM)
            hx-sync=(SEARCH_SYNC)
            hx-vals=(format!(r#"{{"page": "{page}"}}"#))
        { (label) }
    }
}
