//! `nw-core`: foundational types for the `nodewalk` framework.
//!
//! This crate is a dependency of every other `nw-*` crate.  It has no `nw-*`
//! dependencies and few external ones (`rand`, `thiserror`, `glam`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `NodeId`                                   |
//! | [`time`]    | `Tick`, `SimConfig`                                   |
//! | [`color`]   | `Rgb`, `SOFT_GREEN` default palette                   |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]   | `NwError`, `NwResult`                                 |
//!
//! Positions are plain [`glam::Vec3`]; the re-export below keeps every crate
//! on the same `glam` version.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod color;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::{Rgb, SOFT_GREEN};
pub use error::{NwError, NwResult};
pub use glam::Vec3;
pub use ids::{AgentId, NodeId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimConfig, Tick};
