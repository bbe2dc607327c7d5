use leptos::logging::warn;

/// Blocking browser alert. Falls back to the console outside a window context.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!("window not available: {message}");
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        warn!("alert failed: {e:?}");
    }
}
