use leptos::*;

use crate::models::game::Game;

#[component]
pub fn SearchBar(query: ReadSignal<String>, set_query: WriteSignal<String>) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-bar"
            placeholder="Search by title or platform"
            prop:value=move || query.get()
            on:input=move |ev| set_query.set(event_target_value(&ev))
        />
    }
}

/// Client-side filter over title and platform names, case-insensitive.
pub fn filter_games(games: &[Game], query: &str) -> Vec<Game> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return games.to_vec();
    }
    games
        .iter()
        .filter(|game| {
            game.title.to_lowercase().contains(&needle)
                || game
                    .platform
                    .iter()
                    .any(|platform| platform.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(title: &str, platforms: &[&str]) -> Game {
        Game {
            id: title.to_lowercase(),
            title: title.to_string(),
            platform: platforms.iter().map(|p| p.to_string()).collect(),
            reviews: None,
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let games = [game("Hades", &["Switch"]), game("Celeste", &["PC"])];
        assert_eq!(filter_games(&games, "").len(), 2);
        assert_eq!(filter_games(&games, "   ").len(), 2);
    }

    #[test]
    fn title_match_is_case_insensitive() {
        let games = [game("Hades", &["Switch"]), game("Celeste", &["PC"])];
        let found = filter_games(&games, "hAdEs");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Hades");
    }

    #[test]
    fn platform_names_match_too() {
        let games = [game("Hades", &["Switch"]), game("Celeste", &["PC"])];
        let found = filter_games(&games, "switch");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Hades");
    }

    #[test]
    fn no_match_is_empty() {
        let games = [game("Hades", &["Switch"])];
        assert!(filter_games(&games, "dreamcast").is_empty());
    }
}
