//! The `Simulation` struct and its tick loop.

use nw_agent::{Agent, AgentSnapshot, Decision};
use nw_core::{AgentId, Rgb, SimConfig, Tick, Vec3};
use nw_graph::NodeGraph;
use nw_reserve::ReservationWindow;

use crate::{SimBuilder, SimObserver, SimResult};

// ── TickStats ─────────────────────────────────────────────────────────────────

/// What happened during one [`Simulation::tick`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub tick:        Tick,
    /// `true` if this tick started a movement cycle.
    pub cycle_start: bool,
    /// Reservations removed at the end of the tick.
    pub evicted:     usize,
    /// Agents that claimed a new neighbour.
    pub moved:       usize,
    /// Agents that fell back to staying on their node.
    pub stayed:      usize,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// Owns the graph, the shared reservation window, and every agent.
///
/// Create via [`SimBuilder`] or [`Simulation::new`].
pub struct Simulation {
    config:       SimConfig,
    graph:        NodeGraph,
    reservations: ReservationWindow,
    /// Indexed by `AgentId`; also the update order.
    agents:       Vec<Agent>,
    /// Frame `run`/`run_ticks` will process next.
    next_tick:    Tick,
}

impl Simulation {
    /// Build the graph from raw node positions and spawn `agent_count`
    /// agents, using default values for everything else in [`SimConfig`].
    pub fn new<I>(
        node_positions:  I,
        edge_threshold:  f32,
        agent_count:     usize,
        movement_period: u32,
        color_palette:   &[Rgb],
    ) -> SimResult<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let graph = NodeGraph::build(node_positions, edge_threshold)?;
        let config = SimConfig { agent_count, movement_period, ..SimConfig::default() };
        SimBuilder::new(config, graph)
            .palette(color_palette.to_vec())
            .build()
    }

    pub(crate) fn from_parts(
        config:       SimConfig,
        graph:        NodeGraph,
        reservations: ReservationWindow,
        agents:       Vec<Agent>,
    ) -> Self {
        Self { config, graph, reservations, agents, next_tick: Tick::ZERO }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance every agent by one frame.
    ///
    /// The host supplies `frame` from its own counter; consecutive calls
    /// should pass consecutive values.
    pub fn tick(&mut self, frame: Tick) -> TickStats {
        let period = self.config.movement_period;

        // ① Snapshot the window length before anyone decides.
        let evict_count = frame
            .is_cycle_start(period)
            .then(|| self.reservations.size());

        let mut stats = TickStats {
            tick:        frame,
            cycle_start: evict_count.is_some(),
            ..TickStats::default()
        };

        // ② Sequential update in AgentId order.
        for agent in &mut self.agents {
            match agent.update(period, &self.graph, &mut self.reservations, frame) {
                Some(Decision::Moved { .. }) => stats.moved += 1,
                Some(Decision::Stayed { .. }) => stats.stayed += 1,
                None => {}
            }
        }

        // ③ Evict only what existed before ②.
        if let Some(count) = evict_count {
            self.reservations.evict_prefix(count);
            stats.evicted = count;
            log::debug!(
                "{frame}: evicted {count}, {} reservations held, {} moved, {} stayed",
                self.reservations.size(),
                stats.moved,
                stats.stayed,
            );
        }

        self.next_tick = frame + 1;
        stats
    }

    /// Run exactly `n` ticks from the internal frame counter.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Run from the internal frame counter up to `config.end_tick()`, then
    /// call `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.next_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.next_tick);
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.next_tick;
        observer.on_tick_start(now);
        let stats = self.tick(now);
        observer.on_tick_end(now, &stats);
        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents);
        }
    }

    // ── Read-only access ──────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    pub fn reservations(&self) -> &ReservationWindow {
        &self.reservations
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// The frame `run`/`run_ticks` will process next.
    pub fn next_tick(&self) -> Tick {
        self.next_tick
    }

    /// Owned render state of every agent, in `AgentId` order.
    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents.iter().map(Agent::snapshot).collect()
    }
}
