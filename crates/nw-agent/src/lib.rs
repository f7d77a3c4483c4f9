//! `nw-agent`: agents that hop node-to-node without sharing a destination.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`agent`]  | `Agent`: spawn, per-tick update, accessors; `AgentSnapshot`   |
//! | [`state`]  | `MoveState` (idle / transiting view), `Decision`               |
//! | [`trail`]  | `Trail`: newest-first ring of the last 40 positions           |
//! | [`marker`] | `Marker`: circle / oriented triangle derived from a trail     |
//! | [`error`]  | `AgentError`, `AgentResult<T>`                                 |
//!
//! # Movement model
//!
//! Time is split into cycles of `movement_period` ticks.  On the first tick
//! of a cycle each agent arrives at its target, then claims an unclaimed
//! neighbour (never the node it just left) in the shared
//! [`ReservationWindow`](nw_reserve::ReservationWindow).  If every neighbour
//! is taken it stays put and claims its own node.  For the rest of the cycle
//! its position is interpolated linearly between the two nodes.

pub mod agent;
pub mod error;
pub mod marker;
pub mod state;
pub mod trail;


pub use agent::{Agent, AgentSnapshot};
pub use error::{AgentError, AgentResult};
pub use marker::Marker;
pub use state::{Decision, MoveState};
pub use trail::{TRAIL_LEN, Trail};
