//! Simulation observer trait for progress reporting and render hand-off.

use nw_agent::Agent;
use nw_core::Tick;

use crate::TickStats;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] and
/// [`Simulation::run_ticks`][crate::Simulation::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if stats.cycle_start {
///             println!("{tick}: {} moved, {} stayed", stats.moved, stats.stayed);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the tick is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick, including eviction, has completed.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to every agent, for renderers and recorders.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Agent]) {}

    /// Called once after the final tick of [`run`][crate::Simulation::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
