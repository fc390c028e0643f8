use remark_client::Dialogs;

/// `window.alert` and `window.confirm`
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        let res = match web_sys::window() {
            Some(w) => w.alert_with_message(message),
            None => return,
        };
        if let Err(e) = res {
            tracing::error!("failed showing alert: {e:?}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        // a dialog that cannot be shown never confirms
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
