//! # client
//!
//! Leptos + WASM frontend for the Horas Penosas hour-logging application.
//! Contains pages (login, worker dashboard, admin dashboard, profile),
//! application state, the REST API wrapper, and the client-local unit
//! conversion and validation helpers.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — mounts the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
