//! Verified Response Network: a registry of crisis-ready service providers.
//!
//! The [`registry`] module holds the view-independent logic (provider catalog,
//! search filter, signup form, view selector); [`web`] projects it onto
//! server-rendered HTML.

pub mod config;
pub mod error;
pub mod registry;
pub mod telemetry;
pub mod web;
