//! Headless Bridgeworld client.
//!
//! Wires content, configuration and logging around a single
//! [`bridgeworld_core::GameEngine`] session and plays a run of expeditions:
//! enter a fresh dungeon at the character's level, fight the next target
//! until the dungeon is cleared, respawn on death.

pub mod config;
pub mod expedition;
pub mod logging;
pub mod session;

pub use config::{ClientConfig, ReportFormat};
pub use expedition::{ExpeditionReport, run_expedition};
pub use session::{SessionReport, run_session};
