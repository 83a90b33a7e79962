use maud::{html, Markup};

/// Five stars, filled up to the rounded rating, plus the review count.
pub fn star_rating(rating: f64, review_count: Option<u32>) -> Markup {
    let filled = rating.clamp(0.0, 5.0).round() as usize;

    html! {
        span class="rating" title=(format!("{rating:.1} out of 5")) {
            @for i in 0..5 {
                @if i < filled {
                    span class="star filled" aria-hidden="true" { "★" }
                } @else {
                    span class="star" aria-hidden="true" { "☆" }
                }
            }
            span class="rating-value" { (format!("{rating:.1}")) }
            @if let Some(count) = review_count {
                span class="review-count" {
                    "(" (count) @if count == 1 { " review" } @else { " reviews" } ")"
                }
            }
        }
    }
}
