use leptos::*;

/// Controlled cell for inline renames. Commits on Enter or blur, and only
/// when the value actually changed and is non-blank, so one rename costs
/// one mutation instead of one per keystroke.
#[component]
pub fn EditableCell(value: String, on_commit: Callback<String>) -> impl IntoView {
    let committed = store_value(value.clone());
    let (draft, set_draft) = create_signal(value);

    let commit = move || {
        let text = draft.get().trim().to_string();
        if text.is_empty() || committed.with_value(|current| *current == text) {
            return;
        }
        committed.set_value(text.clone());
        on_commit.call(text);
    };

    view! {
        <input
            type="text"
            class="editable-cell"
            prop:value=move || draft.get()
            on:input=move |ev| set_draft.set(event_target_value(&ev))
            on:blur=move |_| commit()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    commit();
                }
            }
        />
    }
}
