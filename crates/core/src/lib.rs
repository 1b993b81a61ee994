//! Samena Core - Shared types library.
//!
//! This crate provides the types shared by the Samena demo site:
//! - `site` - Public demo front-end (login gate, dashboard, assistant stubs)
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers such as the validated company name

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
