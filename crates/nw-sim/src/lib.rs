//! `nw-sim`: tick loop orchestrator for the nodewalk framework.
//!
//! # Snapshot-then-evict tick
//!
//! ```text
//! tick(frame):
//!   ① Snapshot  on cycle-start frames (frame % movement_period == 0)
//!               remember how many reservations exist right now.
//!   ② Update    every agent, in AgentId order, calls Agent::update.
//!               Agent i sees the claims made by agents 0..i this frame.
//!   ③ Evict     on cycle-start frames only, drop exactly the remembered
//!               prefix.  Claims made in ② survive into the next cycle.
//! ```
//!
//! Nothing is evicted while agents are still deciding, and frames that do
//! not start a cycle leave the reservation window untouched.
//!
//! Execution is single-threaded by contract: update order is observable.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash for the reservation count index.                 |
//! | `serde`   | Serde derives on `SimConfig` and `GridLayout`.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nw_core::{SimConfig, SOFT_GREEN};
//! use nw_graph::{GridLayout, NodeGraph};
//! use nw_sim::{NoopObserver, SimBuilder};
//!
//! let layout = GridLayout::default();
//! let graph = NodeGraph::build(layout.positions(), layout.edge_threshold())?;
//! let mut sim = SimBuilder::new(SimConfig::default(), graph)
//!     .palette(SOFT_GREEN.to_vec())
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Simulation, TickStats};
