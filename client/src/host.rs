//! Host web-app container bindings.
//!
//! The mini app runs inside a chat-platform container that exposes a
//! `Telegram.WebApp` object on the page. Notifications go through the
//! container's native popup; there is no in-app fallback.

use pop_battle_core::log;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Expand the mini app to the container's full height
    #[wasm_bindgen(js_namespace = ["Telegram", "WebApp"])]
    pub fn expand();

    #[wasm_bindgen(js_namespace = ["Telegram", "WebApp"], js_name = showPopup)]
    fn show_popup(params: JsValue);
}

/// Title used for every notification popup
const POPUP_TITLE: &str = "Pop Battle";

#[derive(Serialize)]
struct PopupParams<'a> {
    title: &'a str,
    message: &'a str,
}

/// Show a native host popup with the given message
pub fn notify(message: &str) {
    let params = PopupParams {
        title: POPUP_TITLE,
        message,
    };
    match serde_wasm_bindgen::to_value(&params) {
        Ok(value) => show_popup(value),
        Err(e) => log::error(&format!("notify serialization failed: {:?}", e)),
    }
}
