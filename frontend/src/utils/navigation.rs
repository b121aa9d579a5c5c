use crate::utils::storage::window;

/// Delay before leaving a form after a successful save.
pub const SAVE_REDIRECT_DELAY_MS: u32 = 1200;
/// Delay after login and password change.
pub const SHORT_REDIRECT_DELAY_MS: u32 = 500;

pub fn current_path() -> Option<String> {
    window().ok()?.location().pathname().ok()
}

pub fn redirect(path: &str) {
    if current_path().as_deref() == Some(path) {
        return;
    }
    if let Ok(window) = window() {
        if window.location().set_href(path).is_err() {
            log::warn!("Failed to navigate to {}", path);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn redirect_after(path: &'static str, delay_ms: u32) {
    redirect_after_owned(path.to_string(), delay_ms);
}

#[cfg(target_arch = "wasm32")]
pub fn redirect_after_owned(path: String, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || redirect(&path)).forget();
}

// Host builds have no browser timers; callers only reach this from event handlers.
#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_after(path: &'static str, _delay_ms: u32) {
    redirect(path);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_after_owned(path: String, _delay_ms: u32) {
    redirect(&path);
}
