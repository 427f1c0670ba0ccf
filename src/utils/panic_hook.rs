use std::panic;
use leptos::logging::log;

/// Routes panics to the browser console, tagging the ones raised while
/// talking to the API so they are easy to spot next to `[API]` logs.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("gloo") || message.contains("fetch") {
            log!("[PANIC] A request to the backend panicked: {}", message);
        }
    }));
}

/// Call from the hydration entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
