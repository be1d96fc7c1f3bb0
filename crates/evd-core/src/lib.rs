//! Core evd library (auth store, events store, router, config).
//!
//! State lives in memory for the lifetime of an [`app::App`]; nothing is
//! persisted.

pub mod app;
pub mod clock;
pub mod command;
pub mod config;
pub mod features;
pub mod logging;
pub mod router;
pub mod script;

pub use features::{auth, events};
