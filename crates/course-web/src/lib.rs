pub mod api;
pub mod app;
pub mod assets;
pub mod catalog;
pub mod components;
pub mod list;
#[cfg(feature = "ssr")]
pub mod logging;
pub mod models;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
