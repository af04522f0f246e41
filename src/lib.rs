//! # weather-page
//!
//! WASM page controller for the weather dashboard's server-rendered pages.
//!
//! The crate keeps the light/dark theme preference in sync with the
//! document, refreshes the header clock, dismisses transient alerts, and runs
//! the "update all weather" button flow against the server. Logic lives in
//! plain Rust behind small traits (`controller::ports`, `util::*`); the
//! `dom` module supplies the `web-sys` implementations under the `hydrate`
//! feature.

pub mod config;
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod net;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    dom::start();
}
