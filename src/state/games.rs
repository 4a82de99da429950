/// The games hook: one store created at app start, provided via context,
/// reachable anywhere with `use_games()`.
///
/// Every list rendered on screen mirrors the most recent server response.
/// Operations set their busy flag, clear the previous error, spawn the
/// network call, and apply the SERVER'S payload on resolution; nothing is
/// applied optimistically, so there is nothing to roll back on failure.
use chrono::Local;
use futures::future;
use leptos::logging::{error, warn};
use leptos::{
    create_rw_signal, use_context, Owner, RwSignal, SignalSet, SignalUpdate, SignalWithUntracked,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

use crate::graphql::{GraphQlClient, GraphQlError, NoVariables};
use crate::models::game::{Game, GameDraft, GameEdits};
use crate::utils::leptos_owner::with_owner_safe;

const GAMES_LIST_QUERY: &str = "
query GamesList {
  games { id title platform }
}";

const GAME_DETAILS_QUERY: &str = "
query GameDetails($id: ID!) {
  game(id: $id) {
    id title platform
    reviews { id rating content author { id name verified } }
  }
}";

const ADD_GAME_MUTATION: &str = "
mutation AddGame($game: AddGameInput!) {
  addGame(game: $game) { id title platform }
}";

const UPDATE_GAME_MUTATION: &str = "
mutation UpdateGame($id: ID!, $edits: EditGameInput!) {
  updateGame(id: $id, edits: $edits) { id title platform }
}";

const DELETE_GAME_MUTATION: &str = "
mutation DeleteGame($id: ID!) {
  deleteGame(id: $id) { id title platform }
}";

#[derive(Serialize, Debug)]
struct IdVariables {
    id: String,
}

#[derive(Serialize, Debug)]
struct AddGameVariables {
    game: GameDraft,
}

#[derive(Serialize, Debug)]
struct UpdateGameVariables {
    id: String,
    edits: GameEdits,
}

#[derive(Deserialize, Debug)]
struct GamesListData {
    games: Option<Vec<Game>>,
}

#[derive(Deserialize, Debug)]
struct GameDetailsData {
    game: Option<Game>,
}

#[derive(Deserialize, Debug)]
struct AddGameData {
    #[serde(rename = "addGame")]
    created: Option<Game>,
}

#[derive(Deserialize, Debug)]
struct UpdateGameData {
    #[serde(rename = "updateGame")]
    updated: Option<Game>,
}

#[derive(Deserialize, Debug)]
struct DeleteGameData {
    #[serde(rename = "deleteGame")]
    remaining: Option<Vec<Game>>,
}

#[derive(Clone)]
pub struct GamesStore {
    client: GraphQlClient,
    owner: Owner,
    pub games: RwSignal<Vec<Game>>,
    pub selected: RwSignal<Option<Game>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub last_refreshed: RwSignal<Option<String>>,
}

pub fn use_games() -> GamesStore {
    use_context::<GamesStore>().expect("GamesStore is provided at the app root")
}

impl GamesStore {
    pub fn new(client: GraphQlClient, owner: Owner) -> Self {
        Self {
            client,
            owner,
            games: create_rw_signal(Vec::new()),
            selected: create_rw_signal(None),
            loading: create_rw_signal(false),
            saving: create_rw_signal(false),
            error: create_rw_signal(None),
            last_refreshed: create_rw_signal(None),
        }
    }

    /// Reloads the whole list and stamps the refresh time.
    pub fn refresh(&self) {
        self.loading.set(true);
        self.error.set(None);
        let store = self.clone();
        spawn_local(async move {
            let result = store
                .client
                .execute::<_, GamesListData>("GamesList", GAMES_LIST_QUERY, NoVariables::default())
                .await;
            with_owner_safe(store.owner, "games refresh", || {
                match result {
                    Ok(GamesListData { games }) => {
                        store.games.set(games.unwrap_or_default());
                        store.last_refreshed.set(Some(refresh_stamp()));
                    }
                    Err(err) => store.fail("refresh", err),
                }
                store.loading.set(false);
            });
        });
    }

    /// Loads one game with its reviews into `selected`. On a deep link the
    /// list signal is still empty, so the list is fetched concurrently to
    /// give back-navigation something to show.
    pub fn load_game(&self, id: String) {
        self.loading.set(true);
        self.error.set(None);
        self.selected.set(None);
        let warm_list = self.games.with_untracked(|games| games.is_empty());
        let store = self.clone();
        spawn_local(async move {
            let details = store.client.execute::<_, GameDetailsData>(
                "GameDetails",
                GAME_DETAILS_QUERY,
                IdVariables { id: id.clone() },
            );
            let (details_result, list_result) = if warm_list {
                let list = store.client.execute::<_, GamesListData>(
                    "GamesList",
                    GAMES_LIST_QUERY,
                    NoVariables::default(),
                );
                let (details, list) = future::join(details, list).await;
                (details, Some(list))
            } else {
                (details.await, None)
            };
            with_owner_safe(store.owner, "game details", || {
                match details_result {
                    Ok(GameDetailsData { game: Some(game) }) => store.selected.set(Some(game)),
                    Ok(GameDetailsData { game: None }) => {
                        warn!("[GAMES] no game with id {}", id);
                        store.selected.set(None);
                    }
                    Err(err) => store.fail("load_game", err),
                }
                match list_result {
                    Some(Ok(GamesListData { games })) => {
                        store.games.set(games.unwrap_or_default());
                        store.last_refreshed.set(Some(refresh_stamp()));
                    }
                    Some(Err(err)) => warn!("[GAMES] background list load failed: {}", err),
                    None => {}
                }
                store.loading.set(false);
            });
        });
    }

    /// `addGame` mutation; the RETURNED game lands in the list, not the draft.
    pub fn add_game(&self, draft: GameDraft) {
        self.saving.set(true);
        self.error.set(None);
        let store = self.clone();
        spawn_local(async move {
            let result = store
                .client
                .execute::<_, AddGameData>(
                    "AddGame",
                    ADD_GAME_MUTATION,
                    AddGameVariables { game: draft },
                )
                .await;
            with_owner_safe(store.owner, "add game", || {
                match result {
                    Ok(AddGameData {
                        created: Some(game),
                    }) => store.games.update(|games| apply_created(games, game)),
                    Ok(AddGameData { created: None }) => {
                        store.fail("add_game", GraphQlError::MissingData)
                    }
                    Err(err) => store.fail("add_game", err),
                }
                store.saving.set(false);
            });
        });
    }

    /// `updateGame` mutation; the returned game replaces the matching row
    /// and patches `selected` when the same game is open on a details page.
    pub fn update_game(&self, id: String, edits: GameEdits) {
        self.saving.set(true);
        self.error.set(None);
        let store = self.clone();
        spawn_local(async move {
            let result = store
                .client
                .execute::<_, UpdateGameData>(
                    "UpdateGame",
                    UPDATE_GAME_MUTATION,
                    UpdateGameVariables { id, edits },
                )
                .await;
            with_owner_safe(store.owner, "update game", || {
                match result {
                    Ok(UpdateGameData {
                        updated: Some(game),
                    }) => {
                        store.games.update(|games| apply_updated(games, game.clone()));
                        store
                            .selected
                            .update(|selected| patch_selected(selected, &game));
                    }
                    Ok(UpdateGameData { updated: None }) => {
                        store.fail("update_game", GraphQlError::MissingData)
                    }
                    Err(err) => store.fail("update_game", err),
                }
                store.saving.set(false);
            });
        });
    }

    /// `deleteGame` mutation; the server returns the remaining games and the
    /// whole list is replaced with that payload.
    pub fn delete_game(&self, id: String) {
        self.saving.set(true);
        self.error.set(None);
        let store = self.clone();
        spawn_local(async move {
            let result = store
                .client
                .execute::<_, DeleteGameData>(
                    "DeleteGame",
                    DELETE_GAME_MUTATION,
                    IdVariables { id: id.clone() },
                )
                .await;
            with_owner_safe(store.owner, "delete game", || {
                match result {
                    Ok(DeleteGameData { remaining }) => {
                        store
                            .games
                            .update(|games| apply_remaining(games, remaining.unwrap_or_default()));
                        store
                            .selected
                            .update(|selected| clear_selected_if(selected, &id));
                    }
                    Err(err) => store.fail("delete_game", err),
                }
                store.saving.set(false);
            });
        });
    }

    fn fail(&self, operation: &str, err: GraphQlError) {
        error!("[GAMES] {} failed: {}", operation, err);
        self.error.set(Some(err.to_string()));
    }
}

fn refresh_stamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// `addGame` and `updateGame` merge the same way: the returned row replaces
/// any row with its id, or is appended.
pub fn apply_created(games: &mut Vec<Game>, created: Game) {
    apply_updated(games, created);
}

pub fn apply_updated(games: &mut Vec<Game>, updated: Game) {
    if let Some(row) = games.iter_mut().find(|game| game.id == updated.id) {
        *row = updated;
    } else {
        games.push(updated);
    }
}

pub fn apply_remaining(games: &mut Vec<Game>, remaining: Vec<Game>) {
    *games = remaining;
}

/// Clears the details view when the game open there was just deleted.
pub fn clear_selected_if(selected: &mut Option<Game>, deleted_id: &str) {
    if selected.as_ref().is_some_and(|game| game.id == deleted_id) {
        *selected = None;
    }
}

/// Patches title and platforms on the open details page without dropping
/// the reviews the mutation payload does not carry.
pub fn patch_selected(selected: &mut Option<Game>, updated: &Game) {
    if let Some(game) = selected {
        if game.id == updated.id {
            game.title = updated.title.clone();
            game.platform = updated.platform.clone();
        }
    }
}
