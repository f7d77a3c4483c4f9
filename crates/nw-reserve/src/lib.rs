//! `nw-reserve`: the shared table of claimed destination nodes.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`window`] | `ReservationWindow`: ordered claims + count index      |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Uses FxHash for the per-node count index.                |

pub mod window;

#[cfg(test)]
mod tests;

pub use window::ReservationWindow;
