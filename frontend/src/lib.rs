//! Wasm entry point: mounts [`App`] into the document body.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // The content tables are static; this can only fail after a content edit.
    if let Err(err) = app::content::validate() {
        log::error!("chapter index table is inconsistent: {err}");
    }

    leptos::mount::mount_to_body(App);
}
