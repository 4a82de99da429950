/// Table of games filtered by the search query: inline-editable title,
/// platform names, details link, edit and delete actions per row, plus the
/// loading/empty/error states and the last-refreshed stamp.
use leptos::*;

use crate::components::editable_cell::EditableCell;
use crate::components::search_bar::filter_games;
use crate::models::game::{Game, GameEdits};
use crate::state::games::use_games;

#[component]
pub fn GamesList(query: ReadSignal<String>, editing: RwSignal<Option<Game>>) -> impl IntoView {
    let store = use_games();

    let error_banner = {
        let store = store.clone();
        move || {
            store
                .error
                .get()
                .map(|message| view! { <p class="error-banner">{message}</p> })
        }
    };

    let refreshed_stamp = {
        let store = store.clone();
        move || {
            store
                .last_refreshed
                .get()
                .map(|stamp| view! { <p class="refreshed">{"Last refreshed "}{stamp}</p> })
        }
    };

    let body = {
        let store = store.clone();
        move || {
            let visible = filter_games(&store.games.get(), &query.get());
            if visible.is_empty() {
                if store.loading.get() {
                    return view! { <p class="status">{ "Loading games..." }</p> }.into_view();
                }
                return view! { <p class="status">{ "Nothing here yet. Add your first game above." }</p> }
                    .into_view();
            }
            view! {
                <table class="games-table">
                    <thead>
                        <tr>
                            <th>{ "Title" }</th>
                            <th>{ "Platforms" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {visible.into_iter().map(|game| view! {
                            <GameRow game=game editing=editing/>
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_view()
        }
    };

    view! {
        <div class="games-list">
            {error_banner}
            {body}
            {refreshed_stamp}
        </div>
    }
}

#[component]
pub fn GameRow(game: Game, editing: RwSignal<Option<Game>>) -> impl IntoView {
    let store = use_games();
    let row = store_value(game);

    let rename = {
        let store = store.clone();
        Callback::new(move |title: String| {
            let id = row.with_value(|game| game.id.clone());
            store.update_game(id, GameEdits::title_only(title));
        })
    };

    let start_edit = move |_| editing.set(Some(row.get_value()));

    let delete = {
        let store = store.clone();
        move |_| store.delete_game(row.with_value(|game| game.id.clone()))
    };

    view! {
        <tr class="game-row">
            <td>
                <EditableCell value=row.with_value(|game| game.title.clone()) on_commit=rename/>
            </td>
            <td class="platforms">{row.with_value(|game| game.platform.join(", "))}</td>
            <td class="row-actions">
                <a href=format!("/games/{}", row.with_value(|game| game.id.clone()))>{ "Details" }</a>
                <button type="button" on:click=start_edit>{ "Edit" }</button>
                <button type="button" class="danger" on:click=delete>{ "Delete" }</button>
            </td>
        </tr>
    }
}
