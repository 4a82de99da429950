use leptos::*;
use leptos_meta::Title;

use crate::components::game_form::GameForm;
use crate::components::games_list::GamesList;
use crate::components::search_bar::SearchBar;
use crate::models::game::Game;
use crate::state::games::use_games;

/// The catalog page: form, search bar and list over the shared games store.
#[component]
pub fn GamesPage() -> impl IntoView {
    let editing = create_rw_signal(None::<Game>);
    let (query, set_query) = create_signal(String::new());

    let store = use_games();
    create_effect(move |_| {
        // A delete on the details page navigates here with its mutation
        // still in flight; that mutation's remaining-list payload is the
        // fresher state, so don't race it with a refresh.
        if !store.saving.get_untracked() {
            store.refresh();
        }
    });

    view! {
        <Title text="GameRack"/>
        <section class="games-page">
            <h1>{ "Games" }</h1>
            <GameForm editing=editing/>
            <SearchBar query=query set_query=set_query/>
            <GamesList query=query editing=editing/>
        </section>
    }
}
