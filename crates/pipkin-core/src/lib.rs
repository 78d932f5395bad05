//! # Pipkin Core
//!
//! Creature models, care rules, and SQLite persistence for the Pipkin
//! virtual-pet game. This crate has no windowing or GUI dependencies and
//! can be exercised fully headless.

pub mod care;
pub mod db;
pub mod error;
pub mod model;
pub mod stats;

pub use care::{CareSession, TickOutcome};
pub use db::Database;
pub use error::{CoreError, Result};
