use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_navigate, use_params_map};

use crate::components::reviews_list::ReviewsList;
use crate::models::review::average_rating;
use crate::state::games::use_games;

/// One game with its reviews. Deleting the game navigates back to the list.
#[component]
pub fn GameDetailsPage() -> impl IntoView {
    let store = use_games();
    let params = use_params_map();
    let navigate = use_navigate();

    {
        let store = store.clone();
        create_effect(move |_| {
            if let Some(id) = params.with(|params| params.get("id").cloned()) {
                store.load_game(id);
            }
        });
    }

    let body = {
        let store = store.clone();
        move || {
            let Some(game) = store.selected.get() else {
                if store.loading.get() {
                    return view! { <p class="status">{ "Loading game..." }</p> }.into_view();
                }
                if let Some(message) = store.error.get() {
                    return view! { <p class="error-banner">{message}</p> }.into_view();
                }
                return view! {
                    <p class="status">
                        { "No such game. " }
                        <a href="/">{ "Back to games" }</a>
                    </p>
                }
                .into_view();
            };

            let reviews = game.reviews.clone().unwrap_or_default();
            let average = average_rating(&reviews);
            let review_count = match reviews.len() {
                1 => "1 review".to_string(),
                n => format!("{} reviews", n),
            };
            let average_text = match average {
                Some(avg) => format!("average {:.1}/5", avg),
                None => "No ratings yet".to_string(),
            };

            let delete = {
                let store = store.clone();
                let navigate = navigate.clone();
                let id = game.id.clone();
                move |_| {
                    store.delete_game(id.clone());
                    navigate("/", Default::default());
                }
            };

            view! {
                <section class="game-details">
                    <Title text=format!("{} | GameRack", game.title)/>
                    <h1>{game.title.clone()}</h1>
                    <p class="platforms">{game.platform.join(", ")}</p>
                    <p class="summary">{review_count}{" · "}{average_text}</p>
                    <ReviewsList reviews=reviews/>
                    <div class="details-actions">
                        <button type="button" class="danger" on:click=delete>{ "Delete game" }</button>
                        <a href="/">{ "Back to games" }</a>
                    </div>
                </section>
            }
            .into_view()
        }
    };

    view! { <div class="game-details-page">{body}</div> }
}
