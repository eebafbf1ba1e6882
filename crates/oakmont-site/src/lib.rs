//! Oakmont Power marketing site
//!
//! One page: header, hero, services, contact form and footer. The server
//! renders it; the `hydrate` build makes the contact form live in the browser.

pub mod app;
pub mod components;
pub mod sections;
pub mod timer;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
