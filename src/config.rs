/// Endpoint resolution for the external GraphQL API.
///
/// The API is not part of this app, so the client has to be pointable at it
/// without a rebuild. First non-empty source wins:
/// 1. `?api=<url-encoded endpoint>` in the page query string
/// 2. `window.GAMERACK_GRAPHQL_URL` (a hosting page may inject it)
/// 3. `localStorage["gamerack.graphql-endpoint"]`
/// 4. the default local dev server
use leptos::logging::{log, warn};
use wasm_bindgen::JsValue;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";
pub const WINDOW_GLOBAL: &str = "GAMERACK_GRAPHQL_URL";
pub const STORAGE_KEY: &str = "gamerack.graphql-endpoint";

/// Extracts the `api` parameter from a `location.search` string.
pub fn endpoint_from_query(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() != Some("api") {
            continue;
        }
        let raw = parts.next().unwrap_or("");
        if raw.is_empty() {
            continue;
        }
        match urlencoding::decode(raw) {
            Ok(decoded) => return Some(decoded.into_owned()),
            Err(err) => warn!("[CONFIG] skipping undecodable ?api= value: {}", err),
        }
    }
    None
}

/// Picks the endpoint from the resolved sources, in priority order.
pub fn endpoint_from_sources(
    query: Option<String>,
    injected: Option<String>,
    stored: Option<String>,
) -> String {
    [query, injected, stored]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

/// Resolves the endpoint against the live page. Logged once at startup.
pub fn graphql_endpoint() -> String {
    let window = gloo_utils::window();

    let query = window
        .location()
        .search()
        .ok()
        .and_then(|search| endpoint_from_query(&search));
    let injected = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(WINDOW_GLOBAL))
        .ok()
        .and_then(|value| value.as_string());
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

    let endpoint = endpoint_from_sources(query, injected, stored);
    log!("[CONFIG] GraphQL endpoint: {}", endpoint);
    endpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_is_decoded() {
        let search = "?api=http%3A%2F%2Fapi.example%3A8080%2Fgraphql";
        assert_eq!(
            endpoint_from_query(search).as_deref(),
            Some("http://api.example:8080/graphql")
        );
    }

    #[test]
    fn query_param_is_found_among_other_pairs() {
        let search = "?theme=dark&api=http%3A%2F%2Flocalhost%3A9000&debug=1";
        assert_eq!(
            endpoint_from_query(search).as_deref(),
            Some("http://localhost:9000")
        );
    }

    #[test]
    fn missing_or_empty_query_param_is_none() {
        assert_eq!(endpoint_from_query(""), None);
        assert_eq!(endpoint_from_query("?theme=dark"), None);
        assert_eq!(endpoint_from_query("?api="), None);
    }

    #[test]
    fn query_beats_injected_beats_stored() {
        let picked = endpoint_from_sources(
            Some("http://from-query".into()),
            Some("http://injected".into()),
            Some("http://stored".into()),
        );
        assert_eq!(picked, "http://from-query");

        let picked = endpoint_from_sources(
            None,
            Some("http://injected".into()),
            Some("http://stored".into()),
        );
        assert_eq!(picked, "http://injected");

        let picked = endpoint_from_sources(None, None, Some("http://stored".into()));
        assert_eq!(picked, "http://stored");
    }

    #[test]
    fn blank_sources_fall_through_to_the_default() {
        let picked = endpoint_from_sources(Some("   ".into()), Some(String::new()), None);
        assert_eq!(picked, DEFAULT_ENDPOINT);
    }
}
