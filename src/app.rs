/// Main application entry point for GameRack.
/// Builds the GraphQL client from config, creates the two data stores, and
/// wires the navigation and routes around them.
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

use crate::components::author_details_page::AuthorDetailsPage;
use crate::components::authors_page::AuthorsPage;
use crate::components::game_details_page::GameDetailsPage;
use crate::components::games_page::GamesPage;
use crate::config;
use crate::graphql::GraphQlClient;
use crate::state::authors::AuthorsStore;
use crate::state::games::GamesStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = GraphQlClient::new(config::graphql_endpoint());

    // Stores capture the root owner so async completions can tell whether
    // the app is still alive when they land.
    let owner = Owner::current().expect("App must be mounted inside a reactive owner");
    provide_context(GamesStore::new(client.clone(), owner));
    provide_context(AuthorsStore::new(client, owner));

    view! {
        <Title text="GameRack"/>
        <Router>
            <nav class="top-nav">
                <a class="brand" href="/">{ "GameRack" }</a>
                <a href="/">{ "Games" }</a>
                <a href="/authors">{ "Authors" }</a>
            </nav>
            <main>
                <Routes>
                    <Route path="/" view=GamesPage/>
                    <Route path="/games/:id" view=GameDetailsPage/>
                    <Route path="/authors" view=AuthorsPage/>
                    <Route path="/authors/:id" view=AuthorDetailsPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>{ "Page not found" }</h1>
            <a href="/">{ "Back to games" }</a>
        </section>
    }
}
