//! Frame counter and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter, one per rendered frame.
//! Movement is quantised into cycles of `movement_period` ticks: an agent
//! re-decides its destination on every tick where
//! `tick % movement_period == 0` and spends the rest of the cycle
//! interpolating towards it.  Using an integer tick keeps the cycle
//! arithmetic exact (no floating-point drift).

use std::fmt;

use crate::{NwError, NwResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter supplied by the host.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Position inside the current movement cycle, in `[0, period)`.
    ///
    /// # Panics
    /// Panics if `period == 0`.
    #[inline]
    pub fn phase(self, period: u32) -> u32 {
        (self.0 % period as u64) as u32
    }

    /// `true` on the first tick of a movement cycle.
    #[inline]
    pub fn is_cycle_start(self, period: u32) -> bool {
        self.phase(period) == 0
    }

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the host and passed to the
/// simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Ticks spent travelling one edge.  Must be non-zero.  Default: 20.
    pub movement_period: u32,

    /// Number of agents to spawn.  Must be non-zero and no larger than the
    /// node count.  Default: 120.
    pub agent_count: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks to run when the host drives the loop with `Simulation::run`.
    pub total_ticks: u64,

    /// Call the observer's snapshot hook every N ticks.  0 disables it.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            movement_period:         20,
            agent_count:             120,
            seed:                    42,
            total_ticks:             600,
            snapshot_interval_ticks: 20,
        }
    }
}

impl SimConfig {
    /// The tick at which a `run` ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Check the parameters that do not depend on the graph.
    pub fn validate(&self) -> NwResult<()> {
        if self.movement_period == 0 {
            return Err(NwError::Config("movement_period must be non-zero".into()));
        }
        if self.agent_count == 0 {
            return Err(NwError::Config("agent_count must be non-zero".into()));
        }
        Ok(())
    }
}
