//! `nw-graph`: the fixed graph agents walk on.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `NodeGraph` (positions + CSR adjacency), `NodeGraphBuilder` |
//! | [`grid`]    | `GridLayout`: square-grid node positions and threshold     |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GridLayout`.           |

pub mod error;
pub mod graph;
pub mod grid;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{NodeGraph, NodeGraphBuilder};
pub use grid::GridLayout;
