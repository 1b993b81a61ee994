//! Core types for the Samena demo site.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod company;

pub use company::{CompanyName, CompanyNameError};
