/// Mock `fetch` implementation for the browser tests.
///
/// The GraphQL client posts `{query, variables}` bodies through the real
/// `window.fetch`; this mock replaces it with one that records every request
/// body and answers with a canned envelope keyed by the operation name
/// sniffed from the query string.
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock() {
    window.__gamerackMock = { responses: {}, requests: [] };
    window.fetch = function (_url, options) {
        const body = JSON.parse(options.body);
        window.__gamerackMock.requests.push(body);

        const match = body.query.match(/(?:query|mutation)\s+([A-Za-z0-9_]+)/);
        const operation = match ? match[1] : "unknown";
        const canned = window.__gamerackMock.responses[operation];
        const payload = canned !== undefined
            ? canned
            : JSON.stringify({ errors: [{ message: "no mock response for " + operation }] });

        console.log("[MOCK] fetch answering " + operation);
        return Promise.resolve(new Response(payload, {
            status: 200,
            headers: { "Content-Type": "application/json" }
        }));
    };
    return true;
}

export function mock_response(operation, body) {
    window.__gamerackMock.responses[operation] = body;
}

export function recorded_requests() {
    return JSON.stringify(window.__gamerackMock.requests);
}

export function reset_fetch_mock() {
    window.__gamerackMock = { responses: {}, requests: [] };
}
"#)]
extern "C" {
    /// Replaces `window.fetch` and resets the recorded state.
    pub fn install_fetch_mock() -> bool;

    /// Registers the canned response body for one operation name.
    pub fn mock_response(operation: &str, body: &str);

    /// All request bodies seen so far, as a JSON array string.
    pub fn recorded_requests() -> String;

    /// Clears canned responses and recorded requests.
    pub fn reset_fetch_mock();
}
