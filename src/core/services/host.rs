//! Browser side effects the controllers need: alerts, console logging,
//! navigation, timers and the drag-and-drop data store.

use web_sys::DataTransfer;

const DRAG_FORMAT: &str = "text/plain";

#[allow(async_fn_in_trait)]
pub trait UiHost {
    /// Blocking user-facing message.
    fn alert(&self, message: &str);

    fn log_info(&self, message: &str);

    fn log_error(&self, message: &str);

    fn navigate(&self, url: &str);

    /// Resolves after `ms` milliseconds; `0` means "next tick".
    async fn delay(&self, ms: u32);
}

/// Hands a failed browser call to `on_error`. Returns whether the call succeeded.
fn report_failure<E>(result: Result<(), E>, on_error: impl FnOnce(&E)) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            on_error(&e);
            false
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl UiHost for BrowserHost {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            report_failure(window.alert_with_message(message), |e| web_sys::console::error_1(e));
        }
    }

    fn log_info(&self, message: &str) {
        web_sys::console::log_1(&message.into());
    }

    fn log_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            report_failure(window.location().set_href(url), |e| web_sys::console::error_1(e));
        }
    }

    async fn delay(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Data carried by the platform between `dragstart` and `drop`.
pub trait DragPayload {
    fn set_client_id(&self, client_id: &str);

    fn client_id(&self) -> Option<String>;
}

impl DragPayload for DataTransfer {
    fn set_client_id(&self, client_id: &str) {
        if self.set_data(DRAG_FORMAT, client_id).is_ok() {
            self.set_effect_allowed("move");
        }
    }

    fn client_id(&self) -> Option<String> {
        self.get_data(DRAG_FORMAT).ok().filter(|id| !id.is_empty())
    }
}

// Synthetic drag events may arrive without a data store
impl<T: DragPayload> DragPayload for Option<T> {
    fn set_client_id(&self, client_id: &str) {
        if let Some(payload) = self {
            payload.set_client_id(client_id);
        }
    }

    fn client_id(&self) -> Option<String> {
        self.as_ref().and_then(|payload| payload.client_id())
    }
}
