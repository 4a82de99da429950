use std::panic;

use leptos::logging::log;

use crate::graphql::pending_operations;

/// Sets up a custom panic hook that reports which GraphQL requests were
/// mid-flight when the panic fired, so a set-after-unmount crash can be
/// traced to the request that outlived its component.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let pending = pending_operations();
        if pending.is_empty() {
            log!("[PANIC] no GraphQL requests were in flight");
        } else {
            log!("[PANIC] {} GraphQL request(s) still in flight:", pending.len());
            for (request_id, operation) in pending {
                log!("[PANIC]   {} ({})", operation, request_id);
            }
        }
    }));
}

/// Call in main.rs or app initialization
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] custom panic hook installed");
}
