//! # rincian
//!
//! Leptos + WASM frontend for the expense reimbursement workflow.
//! Employees submit expenses, managers work an approval queue, and
//! low-value items are auto-approved server-side.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the navigation guard. Browser-only code is gated behind
//! the `csr` feature so the default (host) build stays testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
