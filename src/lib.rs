pub mod api;
pub mod app;
pub mod config;
pub mod gate;
pub mod grouping;
pub mod model;
pub mod rsvp;
pub mod timestamp;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
