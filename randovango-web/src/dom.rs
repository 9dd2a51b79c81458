use randovango_core::links::{POPUP_FEATURES, POPUP_TARGET};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
///
/// Native builds (server-side rendering, tests) have no window.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Access the browser `localStorage` handle, if the browser exposes one.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Open a detail map in a fixed-size secondary window.
///
/// The new window handle is not used; failures are logged and otherwise ignored.
pub fn open_popup(url: &str) {
    let Some(win) = window() else {
        return;
    };
    if let Err(err) = win.open_with_url_and_target_and_features(url, POPUP_TARGET, POPUP_FEATURES)
    {
        log::warn!("could not open {url}: {}", js_error_message(&err));
    }
}
