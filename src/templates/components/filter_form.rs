use crate::search::filters::{
    FilterKey, SortBy, BATHROOM_OPTIONS, BEDROOM_OPTIONS, PROPERTY_TYPES,
};
use crate::search::{DisplayMode, SearchState};
use maud::{html, Markup};

use super::{RESULTS_ENDPOINT, RESULTS_TARGET, SEARCH_SYNC};

// Typing fires after a pause; every field posts on its own so the server
// knows (via HX-Trigger-Name) which filter changed.
const TEXT_TRIGGER: &str = "input changed delay:350ms, change";
const SELECT_TRIGGER: &str = "change";

/// The search and filter form. It is also the page's state: every results
/// request posts the whole form, and the server rebuilds `SearchState` from it.
pub fn filter_form(state: &SearchState, view_id: &str) -> Markup {
    let f = &state.filters;

    html! {
        form id="search-form" class="filters" method="post" action="/properties" hx-sync="this:replace" {
            input type="hidden" name="view_id" value=(view_id);
            (page_input(state.pagination.current_page(), false))

            div class="filter-row" {
                (text_field(FilterKey::Search, "Search", "Keyword, neighborhood…", "search", f.get(FilterKey::Search)))
                (text_field(FilterKey::Location, "Location", "City", "text", f.get(FilterKey::Location)))
            }

            div class="filter-row" {
                (text_field(FilterKey::PriceMin, "Min price", "Any", "number", f.get(FilterKey::PriceMin)))
                (text_field(FilterKey::PriceMax, "Max price", "Any", "number", f.get(FilterKey::PriceMax)))

                (select_field(
                    FilterKey::PropertyType,
                    "Type",
                    "Any type",
                    PROPERTY_TYPES.iter().map(|(v, l)| (*v, *l)),
                    f.get(FilterKey::PropertyType),
                ))
                (select_field(
                    FilterKey::Bedrooms,
                    "Bedrooms",
                    "Any",
                    BEDROOM_OPTIONS.iter().map(|v| (*v, *v)),
                    f.get(FilterKey::Bedrooms),
                ))
                (select_field(
                    FilterKey::Bathrooms,
                    "Bathrooms",
                    "Any",
                    BATHROOM_OPTIONS.iter().map(|v| (*v, *v)),
                    f.get(FilterKey::Bathrooms),
                ))
            }

            div class="filter-row filter-footer" {
                label class="field" {
                    span { "Sort by" }
                    select
                        name=(FilterKey::SortBy.form_name())
                        hx-post=(RESULTS_ENDPOINT)
                        hx-target=(RESULTS_TARGET)
                        hx-trigger=(SELECT_TRIGGER)
                        hx-sync=(SEARCH_SYNC)
                    {
                        @for sort in SortBy::ALL {
                            option value=(sort.as_str()) selected[sort == f.sort_by] { (sort.label()) }
                        }
                    }
                }

                fieldset class="view-toggle" {
                    legend class="sr-only" { "Display" }
                    @for mode in [DisplayMode::Grid, DisplayMode::List] {
                        label {
                            input
                                type="radio"
                                name="view"
                                value=(mode.as_str())
                                checked[mode == state.display]
                                hx-post=(RESULTS_ENDPOINT)
                                hx-target=(RESULTS_TARGET)
                                hx-trigger=(SELECT_TRIGGER)
                                hx-sync=(SEARCH_SYNC);
                            " " (mode.label())
                        }
                    }
                }

                button type="submit" class="btn primary" { "Search" }
            }
        }
    }
}

/// Hidden current-page field. Results fragments send an out-of-band copy so
/// the form always knows which page is on screen.
pub fn page_input(page: usize, out_of_band: bool) -> Markup {
    html! {
        @if out_of_band {
            input type="hidden" id="page-input" name="page" value=(page) hx-swap-oob="true";
        } @else {
            input type="hidden" id="page-input" name="page" value=(page);
        }
    }
}

fn text_field(key: FilterKey, label: &str, placeholder: &str, input_type: &str, value: &str) -> Markup {
    html! {
        label class="field" {
            span { (label) }
            input
                type=(input_type)
                name=(key.form_name())
                value=(value)
                placeholder=(placeholder)
                min=[(input_type == "number").then_some("0")]
                hx-post=(RESULTS_ENDPOINT)
                hx-target=(RESULTS_TARGET)
                hx-trigger=(TEXT_TRIGGER)
                hx-sync=(SEARCH_SYNC);
        }
    }
}

fn select_field<'a>(
    key: FilterKey,
    label: &str,
    any_label: &str,
    options: impl Iterator<Item = (&'a str, &'a str)>,
    current: &str,
) -> Markup {
    html! {
        label class="field" {
            span { (label) }
            select
                name=(key.form_name())
                hx-post=(RESULTS_ENDPOINT)
                hx-target=(RESULTS_TARGET)
                hx-trigger=(SELECT_TRIGGER)
                hx-sync=(SEARCH_SYNC)
            {
                option value="" selected[current.is_empty()] { (any_label) }
                @for (value, text) in options {
                    option value=(value) selected[value == current] { (text) }
                }
            }
        }
    }
}
