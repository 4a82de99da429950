use leptos::*;

/// Star string for a rating. The display clamps to 0..=5; the raw number
/// shown next to it does not, so an out-of-range server value stays visible.
pub fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn RatingStars(rating: i32) -> impl IntoView {
    view! {
        <span class="rating">
            <span class="rating-stars">{stars(rating)}</span>
            <span class="rating-number">{format!("{}/5", rating)}</span>
        </span>
    }
}
