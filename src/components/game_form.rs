use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::platform_editor::PlatformEditor;
use crate::models::game::{Game, GameDraft, GameEdits};
use crate::state::games::use_games;

/// Add/edit form for a game. When `editing` holds a game the form is
/// prefilled and submits an update; otherwise it submits a new game.
/// Empty titles are ignored (form guard, not schema validation).
#[component]
pub fn GameForm(editing: RwSignal<Option<Game>>) -> impl IntoView {
    let games = use_games();
    let saving = games.saving;
    let (title, set_title) = create_signal(String::new());
    let (platforms, set_platforms) = create_signal(Vec::<String>::new());

    // Prefill when a row is loaded for editing.
    create_effect(move |_| {
        if let Some(game) = editing.get() {
            set_title.set(game.title.clone());
            set_platforms.set(game.platform.clone());
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = title.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        match editing.get() {
            Some(game) => {
                games.update_game(
                    game.id.clone(),
                    GameEdits {
                        title: Some(name),
                        platform: Some(platforms.get()),
                    },
                );
                editing.set(None);
            }
            None => games.add_game(GameDraft {
                title: name,
                platform: platforms.get(),
            }),
        }

        // Reset values
        set_title.set(String::new());
        set_platforms.set(Vec::new());
    };

    let cancel_edit = move |_| {
        editing.set(None);
        set_title.set(String::new());
        set_platforms.set(Vec::new());
    };

    view! {
        <form class="game-form" on:submit=handle_submit>
            <h2>{move || if editing.get().is_some() { "Edit game" } else { "Add a game" }}</h2>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <PlatformEditor platforms=platforms set_platforms=set_platforms/>
            <button type="submit" prop:disabled=move || saving.get()>
                {move || if editing.get().is_some() { "Save changes" } else { "Add game" }}
            </button>
            {move || editing.get().is_some().then(|| view! {
                <button type="button" on:click=cancel_edit>{ "Cancel" }</button>
            })}
        </form>
    }
}
