/// Thin GraphQL transport: one endpoint, POSTed JSON bodies, parsed
/// envelopes. There is no caching, no retrying, and no schema knowledge
/// here; callers hand in the query string and the variables and get the
/// decoded `data` payload or an error.
use std::cell::RefCell;

use gloo_net::http::Request;
use leptos::logging::log;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Body of every GraphQL POST request.
#[derive(Serialize, Debug)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// Standard GraphQL response envelope.
#[derive(Deserialize, Debug)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

/// Variables payload for operations that take none. Serializes to `{}`.
#[derive(Serialize, Debug, Default)]
pub struct NoVariables {}

#[derive(Debug, Error)]
pub enum GraphQlError {
    #[error("could not reach the GraphQL endpoint: {0}")]
    Transport(String),
    #[error("GraphQL endpoint returned HTTP {0}")]
    Status(u16),
    #[error("server reported errors: {0}")]
    Server(String),
    #[error("malformed GraphQL response: {0}")]
    Decode(String),
    #[error("GraphQL response contained no data")]
    MissingData,
}

impl<T> GraphQlResponse<T> {
    /// A server-reported error list wins over any partial data.
    pub fn into_result(self) -> Result<T, GraphQlError> {
        if let Some(errors) = self.errors {
            if !errors.is_empty() {
                return Err(GraphQlError::Server(join_messages(&errors)));
            }
        }
        self.data.ok_or(GraphQlError::MissingData)
    }
}

fn join_messages(errors: &[GraphQlErrorEntry]) -> String {
    errors
        .iter()
        .map(|entry| entry.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Clone, Debug)]
pub struct GraphQlClient {
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one operation and decode its `data` payload.
    pub async fn execute<V, T>(
        &self,
        operation: &str,
        query: &str,
        variables: V,
    ) -> Result<T, GraphQlError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request_id = Uuid::new_v4().to_string();
        track_pending(&request_id, operation);
        log!("[GRAPHQL] {} ({}) -> {}", operation, request_id, self.endpoint);

        let result = self.post(query, variables).await;
        clear_pending(&request_id);

        match &result {
            Ok(_) => log!("[GRAPHQL] {} ({}) resolved", operation, request_id),
            Err(err) => {
                leptos::logging::error!("[GRAPHQL] {} ({}) failed: {}", operation, request_id, err)
            }
        }
        result
    }

    async fn post<V, T>(&self, query: &str, variables: V) -> Result<T, GraphQlError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest { query, variables };
        let response = Request::post(&self.endpoint)
            .json(&body)
            .map_err(|err| GraphQlError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| GraphQlError::Transport(err.to_string()))?;

        if !response.ok() {
            return Err(GraphQlError::Status(response.status()));
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|err| GraphQlError::Decode(err.to_string()))?;
        envelope.into_result()
    }
}

// In-flight request registry. WASM is single threaded, so a thread local is
// enough; the panic hook reads it to report which requests a crash left
// hanging.
thread_local! {
    static PENDING: RefCell<Vec<(String, String)>> = const { RefCell::new(Vec::new()) };
}

fn track_pending(request_id: &str, operation: &str) {
    PENDING.with(|pending| {
        pending
            .borrow_mut()
            .push((request_id.to_string(), operation.to_string()));
    });
}

fn clear_pending(request_id: &str) {
    PENDING.with(|pending| {
        pending.borrow_mut().retain(|(id, _)| id != request_id);
    });
}

/// Snapshot of the requests currently in flight, as (request id, operation).
pub fn pending_operations() -> Vec<(String, String)> {
    PENDING.with(|pending| pending.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Payload {
        count: i32,
    }

    #[test]
    fn request_body_carries_query_and_variables() {
        #[derive(Serialize)]
        struct Vars {
            id: &'static str,
        }
        let body = GraphQlRequest {
            query: "query GameDetails($id: ID!) { game(id: $id) { id } }",
            variables: Vars { id: "g1" },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value["query"].as_str().unwrap().contains("GameDetails"));
        assert_eq!(value["variables"]["id"], "g1");
    }

    #[test]
    fn no_variables_serializes_to_an_empty_object() {
        let value = serde_json::to_value(NoVariables::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn envelope_with_data_resolves() {
        let envelope: GraphQlResponse<Payload> =
            serde_json::from_str(r#"{"data":{"count":3}}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), Payload { count: 3 });
    }

    #[test]
    fn error_list_wins_over_data() {
        let envelope: GraphQlResponse<Payload> = serde_json::from_str(
            r#"{"data":{"count":3},"errors":[{"message":"nope"},{"message":"still nope"}]}"#,
        )
        .unwrap();
        match envelope.into_result() {
            Err(GraphQlError::Server(message)) => {
                assert_eq!(message, "nope; still nope");
            }
            other => panic!("expected a server error, got {other:?}"),
        }
    }

    #[test]
    fn empty_error_list_does_not_mask_data() {
        let envelope: GraphQlResponse<Payload> =
            serde_json::from_str(r#"{"data":{"count":1},"errors":[]}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), Payload { count: 1 });
    }

    #[test]
    fn null_data_without_errors_is_missing_data() {
        let envelope: GraphQlResponse<Payload> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(matches!(
            envelope.into_result(),
            Err(GraphQlError::MissingData)
        ));
    }

    #[test]
    fn pending_registry_tracks_and_clears() {
        track_pending("id-1", "GamesList");
        track_pending("id-2", "AddGame");
        let snapshot = pending_operations();
        assert!(snapshot.iter().any(|(id, op)| id == "id-1" && op == "GamesList"));
        assert!(snapshot.iter().any(|(id, op)| id == "id-2" && op == "AddGame"));

        clear_pending("id-1");
        let snapshot = pending_operations();
        assert!(!snapshot.iter().any(|(id, _)| id == "id-1"));
        assert!(snapshot.iter().any(|(id, _)| id == "id-2"));
        clear_pending("id-2");
    }
}
