//! JSON API handlers.

pub mod assistants;
