use leptos::*;

use crate::components::rating_stars::RatingStars;
use crate::models::review::Review;

/// Renders a list of reviews. The author byline and the reviewed-game link
/// are each shown only when the query that produced the reviews selected
/// them, so the same component serves game pages and author history.
#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="status">{ "No reviews yet." }</p> }.into_view();
    }

    view! {
        <ul class="reviews">
            {reviews.into_iter().map(|review| view! {
                <li class="review">
                    <RatingStars rating=review.rating/>
                    <p class="review-content">{review.content}</p>
                    {review.author.map(|author| view! {
                        <p class="byline">
                            {"by "}{author.name}
                            {author.verified.then(|| view! {
                                <span class="verified-badge" title="Verified reviewer">{ "✓" }</span>
                            })}
                        </p>
                    })}
                    {review.game.map(|game| view! {
                        <p class="reviewed-game">
                            <a href=format!("/games/{}", game.id)>{game.title}</a>
                        </p>
                    })}
                </li>
            }).collect::<Vec<_>>()}
        </ul>
    }
    .into_view()
}
