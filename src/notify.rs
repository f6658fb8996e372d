//! User Notifications
//!
//! Blocking alert dialogs, the only user-visible failure channel.

/// Show a message to the user via the browser's native alert.
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
