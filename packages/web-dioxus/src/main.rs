//! Reviews Copilot - browser console for the review moderation backend.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```
//!
//! The backend location and API key come from `REVIEWS_API_URL` and
//! `REVIEWS_API_KEY` at build time, defaulting to the local dev backend.

fn main() {
    // Routes logs to the browser console on wasm, stdout elsewhere
    dioxus::logger::initialize_default();

    dioxus::launch(web_dioxus::app::App);
}
