//! Browser client for Pop Battle.
//!
//! A thin `#[wasm_bindgen]` shell over `pop-battle-core`: the page wires
//! its click handlers to [`GameEngine`] methods and renders the views
//! they return.

mod engine;
mod host;

pub use engine::GameEngine;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    #[cfg(feature = "browser_log")]
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[wasm_bindgen]
pub fn greet() -> String {
    "Hello from Pop Battle WASM!".into()
}
