use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;

use crate::components::reviews_list::ReviewsList;
use crate::models::review::average_rating;
use crate::state::authors::use_authors;

/// One author's review history, with the games their reviews belong to and
/// the average rating they hand out.
#[component]
pub fn AuthorDetailsPage() -> impl IntoView {
    let store = use_authors();
    let params = use_params_map();

    {
        let store = store.clone();
        create_effect(move |_| {
            if let Some(id) = params.with(|params| params.get("id").cloned()) {
                store.load_author(id);
            }
        });
    }

    let body = {
        let store = store.clone();
        move || {
            let Some(author) = store.selected.get() else {
                if store.loading.get() {
                    return view! { <p class="status">{ "Loading author..." }</p> }.into_view();
                }
                if let Some(message) = store.error.get() {
                    return view! { <p class="error-banner">{message}</p> }.into_view();
                }
                return view! {
                    <p class="status">
                        { "No such author. " }
                        <a href="/authors">{ "Back to authors" }</a>
                    </p>
                }
                .into_view();
            };

            let reviews = author.reviews.clone().unwrap_or_default();
            let written = match reviews.len() {
                1 => "1 review written".to_string(),
                n => format!("{} reviews written", n),
            };
            let average_text = match average_rating(&reviews) {
                Some(avg) => format!("average rating given {:.1}/5", avg),
                None => "No ratings yet".to_string(),
            };

            view! {
                <section class="author-details">
                    <Title text=format!("{} | GameRack", author.name)/>
                    <h1>
                        {author.name.clone()}
                        {author.verified.then(|| view! {
                            <span class="verified-badge" title="Verified reviewer">{ "✓" }</span>
                        })}
                    </h1>
                    <p class="summary">{written}{" · "}{average_text}</p>
                    <ReviewsList reviews=reviews/>
                    <a href="/authors">{ "Back to authors" }</a>
                </section>
            }
            .into_view()
        }
    };

    view! { <div class="author-details-page">{body}</div> }
}
