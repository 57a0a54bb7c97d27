//! Full-page navigation.
//!
//! Used where in-memory UI state must be discarded (session expiry); it
//! bypasses the client router.

/// Something that can send the browser to another URL with a full reload.
pub trait Navigator: Send + Sync {
    fn hard_redirect(&self, path: &str);
}

/// `window.location.href = path`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
