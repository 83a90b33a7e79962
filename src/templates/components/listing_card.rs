use crate::domain::listing::{format_count, format_price, ListingViewModel};
use crate::search::DisplayMode;
use crate::templates::components::rating::star_rating;
use maud::{html, Markup};

/// Cards for one page of results. Pure: same listings and mode, same markup.
pub fn listing_results(listings: &[ListingViewModel], mode: DisplayMode) -> Markup {
    html! {
        div class=(format!("listing-results listing-{}", mode.as_str())) {
            @for listing in listings {
                (listing_card(listing, mode))
            }
        }
    }
}

pub fn listing_card(listing: &ListingViewModel, mode: DisplayMode) -> Markup {
    html! {
        article class=(format!("listing-card card-{}", mode.as_str())) data-listing-id=(listing.id) {
            a href=(listing.detail_href()) class="listing-image" {
                img src=(listing.image_url) alt=(listing.title) loading="lazy";
            }
            div class="listing-body" {
                h3 class="listing-title" {
                    a href=(listing.detail_href()) { (listing.title) }
                }
                @if !listing.location.is_empty() {
                    p class="listing-location" { (listing.location) }
                }
                p class="listing-price" {
                    strong { (format_price(listing.price)) }
                    span class="per" { "/mo" }
                }
                (listing_facts(listing))
                @if let Some(rating) = listing.rating {
                    (star_rating(rating, listing.review_count))
                }
                div class="listing-actions" {
                    a href=(listing.detail_href()) class="btn primary" { "View details" }
                    // Saving is handled client-side by whoever wires up data-save-listing
                    button type="button" class="btn" data-save-listing=(listing.id) { "Save" }
                }
            }
        }
    }
}

pub fn listing_facts(listing: &ListingViewModel) -> Markup {
    html! {
        ul class="listing-facts" {
            @if let Some(beds) = listing.bedrooms {
                li { (format_count(beds)) " bd" }
            }
            @if let Some(baths) = listing.bathrooms {
                li { (format_count(baths)) " ba" }
            }
            @if let Some(area) = listing.area {
                li { (format_count(area.round())) " sqft" }
            }
        }
    }
}
