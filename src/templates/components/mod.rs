use maud::{html, Markup};

pub mod error;
pub mod filter_form;
pub mod listing_card;
pub mod pagination;
pub mod rating;
pub mod results_panel;

pub use error::html_error_response;
pub use filter_form::filter_form;
pub use rating::star_rating;
pub use results_panel::{results_panel, ResultsView};

// htmx wiring shared by everything that refreshes the results panel.
pub const RESULTS_ENDPOINT: &str = "/properties/results";
pub const RESULTS_TARGET: &str = "#results";
pub const SEARCH_FORM: &str = "#search-form";
pub const SEARCH_SYNC: &str = "#search-form:replace";

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
