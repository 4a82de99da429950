use leptos::logging::log;
use leptos::Owner;

/// Runs `f` inside the reactive owner captured when a store was created.
/// Network responses resolve whenever they resolve; if the owner was
/// disposed in the meantime the result is dropped with a log line instead
/// of panicking on a dead scope.
pub fn with_owner_safe<F, R>(owner: Owner, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            log!("[OWNER] owner disposed before completion: {}", log_context);
            None
        }
    }
}
