//! Samena demo site library.
//!
//! The binary in `main.rs` only wires up logging, Sentry and the listener;
//! everything request-facing lives here so it can be tested in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use app::build_router;
pub use config::SiteConfig;
