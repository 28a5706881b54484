//! Reviews Copilot console.
//!
//! A browser-based management console for the review moderation
//! backend: review inbox with filtering and batch ingest, per-review
//! detail with AI reply suggestions, and aggregate analytics.
//!
//! The binary target (gated behind the `web` feature) launches the app;
//! the library exists so the pure pieces stay testable on the host.

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod utils;
