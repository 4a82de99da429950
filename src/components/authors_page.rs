use leptos::*;
use leptos_meta::Title;

use crate::state::authors::use_authors;

/// The reviewers directory.
#[component]
pub fn AuthorsPage() -> impl IntoView {
    let store = use_authors();
    {
        let store = store.clone();
        create_effect(move |_| store.load_all());
    }

    let error_banner = {
        let store = store.clone();
        move || {
            store
                .error
                .get()
                .map(|message| view! { <p class="error-banner">{message}</p> })
        }
    };

    view! {
        <Title text="Authors | GameRack"/>
        <section class="authors-page">
            <h1>{ "Authors" }</h1>
            {error_banner}
            <AuthorsList/>
        </section>
    }
}

#[component]
pub fn AuthorsList() -> impl IntoView {
    let store = use_authors();

    move || {
        let authors = store.authors.get();
        if authors.is_empty() {
            if store.loading.get() {
                return view! { <p class="status">{ "Loading authors..." }</p> }.into_view();
            }
            return view! { <p class="status">{ "No authors yet." }</p> }.into_view();
        }
        view! {
            <ul class="authors">
                {authors.into_iter().map(|author| view! {
                    <li class="author-row">
                        <a href=format!("/authors/{}", author.id)>{author.name.clone()}</a>
                        {author.verified.then(|| view! {
                            <span class="verified-badge" title="Verified reviewer">{ "✓" }</span>
                        })}
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        }
        .into_view()
    }
}
