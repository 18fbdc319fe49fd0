//! Notification sink backed by `window.alert`

use shared::NotificationSink;

/// Shows each message as a blocking browser alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertSink;

impl NotificationSink for AlertSink {
    fn notify(&self, message: &str) {
        log::info!("[NOTICE] {}", message);

        let Some(window) = web_sys::window() else {
            log::error!("[NOTICE] No window available, dropping notice");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("[NOTICE] alert() failed: {:?}", e);
        }
    }
}
