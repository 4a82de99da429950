/// The authors hook, read-only: the assumed schema has no author mutations.
/// Same mirror-on-resolution rule as the games hook.
use leptos::logging::{error, warn};
use leptos::{create_rw_signal, use_context, Owner, RwSignal, SignalSet};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

use crate::graphql::{GraphQlClient, GraphQlError, NoVariables};
use crate::models::author::Author;
use crate::utils::leptos_owner::with_owner_safe;

const AUTHORS_LIST_QUERY: &str = "
query AuthorsList {
  authors { id name verified }
}";

const AUTHOR_DETAILS_QUERY: &str = "
query AuthorDetails($id: ID!) {
  author(id: $id) {
    id name verified
    reviews { id rating content game { id title platform } }
  }
}";

#[derive(Serialize, Debug)]
struct IdVariables {
    id: String,
}

#[derive(Deserialize, Debug)]
struct AuthorsListData {
    authors: Option<Vec<Author>>,
}

#[derive(Deserialize, Debug)]
struct AuthorDetailsData {
    author: Option<Author>,
}

#[derive(Clone)]
pub struct AuthorsStore {
    client: GraphQlClient,
    owner: Owner,
    pub authors: RwSignal<Vec<Author>>,
    pub selected: RwSignal<Option<Author>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

pub fn use_authors() -> AuthorsStore {
    use_context::<AuthorsStore>().expect("AuthorsStore is provided at the app root")
}

impl AuthorsStore {
    pub fn new(client: GraphQlClient, owner: Owner) -> Self {
        Self {
            client,
            owner,
            authors: create_rw_signal(Vec::new()),
            selected: create_rw_signal(None),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    pub fn load_all(&self) {
        self.loading.set(true);
        self.error.set(None);
        let store = self.clone();
        spawn_local(async move {
            let result = store
                .client
                .execute::<_, AuthorsListData>(
                    "AuthorsList",
                    AUTHORS_LIST_QUERY,
                    NoVariables::default(),
                )
                .await;
            with_owner_safe(store.owner, "authors list", || {
                match result {
                    Ok(AuthorsListData { authors }) => {
                        store.authors.set(authors.unwrap_or_default())
                    }
                    Err(err) => store.fail("load_all", err),
                }
                store.loading.set(false);
            });
        });
    }

    /// Loads one author with their review history (reviews nested with the
    /// games they belong to).
    pub fn load_author(&self, id: String) {
        self.loading.set(true);
        self.error.set(None);
        self.selected.set(None);
        let store = self.clone();
        spawn_local(async move {
            let result = store
                .client
                .execute::<_, AuthorDetailsData>(
                    "AuthorDetails",
                    AUTHOR_DETAILS_QUERY,
                    IdVariables { id: id.clone() },
                )
                .await;
            with_owner_safe(store.owner, "author details", || {
                match result {
                    Ok(AuthorDetailsData {
                        author: Some(author),
                    }) => store.selected.set(Some(author)),
                    Ok(AuthorDetailsData { author: None }) => {
                        warn!("[AUTHORS] no author with id {}", id);
                        store.selected.set(None);
                    }
                    Err(err) => store.fail("load_author", err),
                }
                store.loading.set(false);
            });
        });
    }

    fn fail(&self, operation: &str, err: GraphQlError) {
        error!("[AUTHORS] {} failed: {}", operation, err);
        self.error.set(Some(err.to_string()));
    }
}
