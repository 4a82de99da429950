use leptos::*;

/// List-of-strings editor for a game's platforms. Enter adds the typed
/// platform without submitting the surrounding form; duplicates are ignored.
#[component]
pub fn PlatformEditor(
    platforms: ReadSignal<Vec<String>>,
    set_platforms: WriteSignal<Vec<String>>,
) -> impl IntoView {
    let (entry, set_entry) = create_signal(String::new());

    let add_platform = move || {
        let name = entry.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        set_platforms.update(|list| {
            if !list.contains(&name) {
                list.push(name);
            }
        });
        set_entry.set(String::new());
    };

    view! {
        <div class="platform-editor">
            <ul class="platform-list">
                {move || platforms.get().into_iter().enumerate().map(|(index, name)| view! {
                    <li>
                        <span>{name}</span>
                        <button
                            type="button"
                            on:click=move |_| set_platforms.update(|list| { list.remove(index); })
                        >
                            "Remove"
                        </button>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
            <input
                type="text"
                placeholder="Platform (e.g. Switch)"
                prop:value=move || entry.get()
                on:input=move |ev| set_entry.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        add_platform();
                    }
                }
            />
            <button type="button" on:click=move |_| add_platform()>{ "Add platform" }</button>
        </div>
    }
}
