use crate::domain::listing::{format_price, ListingViewModel};
use crate::templates::components::listing_card::listing_facts;
use crate::templates::components::star_rating;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_page(listing: &ListingViewModel) -> Markup {
    desktop_layout(
        &listing.title,
        html! {
            article class="property-detail" {
                p { a href="/properties" { "← Back to results" } }

                img class="property-hero" src=(listing.image_url) alt=(listing.title);

                header {
                    h1 { (listing.title) }
                    @if let Some(street) = &listing.street {
                        p class="listing-street" { (street) }
                    }
                    @if !listing.location.is_empty() {
                        p class="listing-location" { (listing.location) }
                    }
                }

                p class="listing-price" {
                    strong { (format_price(listing.price)) }
                    span class="per" { "/mo" }
                }

                (listing_facts(listing))

                @if let Some(rating) = listing.rating {
                    (star_rating(rating, listing.review_count))
                }

                dl class="property-meta" {
                    @if let Some(kind) = &listing.property_type {
                        dt { "Type" }
                        dd { (kind) }
                    }
                    @if let Some(date) = listing.listed_on {
                        dt { "Listed" }
                        dd { (date.format("%B %-d, %Y").to_string()) }
                    }
                }

                @if let Some(description) = &listing.description {
                    section class="property-description" {
                        h2 { "About this place" }
                        p { (description) }
                    }
                }
            }
        },
    )
}
