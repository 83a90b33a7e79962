// templates/pages/home.rs

use crate::search::FilterKey;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="hero" {
                h1 { "Find your next home" }
                p { "Browse rentals from owners near you." }

                // GET on purpose: search and location are the shareable part of a query
                form class="hero-search" method="get" action="/properties" {
                    label class="sr-only" for="search" { "Search" }
                    input
                        type="search"
                        id="search"
                        name=(FilterKey::Search.form_name())
                        placeholder="Keyword, neighborhood…";
                    label class="sr-only" for="location" { "Location" }
                    input
                        type="text"
                        id="location"
                        name=(FilterKey::Location.form_name())
                        placeholder="City";
                    button type="submit" class="btn primary" { "Search" }
                }
            }

            (card("How it works", html! {
                p { "Search by keyword or city, then narrow down by price, type and rooms." }
            }))
        },
    )
}
