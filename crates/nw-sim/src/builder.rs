//! Fluent builder for constructing a [`Simulation`].

use nw_agent::Agent;
use nw_core::{AgentId, AgentRng, Rgb, SOFT_GREEN, SimConfig, SimRng};
use nw_graph::NodeGraph;
use nw_reserve::ReservationWindow;

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`]: agent count, movement period, seed, …
/// - [`NodeGraph`]: the graph agents walk on
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                   |
/// |----------------|---------------------------|
/// | `.palette(v)`  | [`SOFT_GREEN`]            |
///
/// When the palette has more than one colour the last one is treated as the
/// background and never assigned to an agent.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, graph)
///     .palette(colors)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    graph:   NodeGraph,
    palette: Option<Vec<Rgb>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, graph: NodeGraph) -> Self {
        Self { config, graph, palette: None }
    }

    pub fn palette(mut self, palette: Vec<Rgb>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Validate inputs, spawn every agent in `AgentId` order, and return a
    /// ready-to-run [`Simulation`].
    ///
    /// Spawning uses one shared [`SimRng`] for start candidates and one
    /// [`AgentRng`] per agent for colour and later neighbour choices, all
    /// derived from `config.seed`.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;

        let palette = self.palette.unwrap_or_else(|| SOFT_GREEN.to_vec());
        let agent_colors = match palette.len() {
            0 => return Err(SimError::EmptyPalette),
            1 => &palette[..],
            n => &palette[..n - 1],
        };

        let agent_count = self.config.agent_count;
        let node_count  = self.graph.node_count();
        if agent_count > node_count {
            return Err(SimError::TooManyAgents { agents: agent_count, nodes: node_count });
        }

        let seed = self.config.seed;
        let mut sim_rng = SimRng::new(seed);
        let mut reservations = ReservationWindow::with_capacity(agent_count * 2);
        let mut agents = Vec::with_capacity(agent_count);

        for i in 0..agent_count {
            let id = AgentId::from_index(i);
            let mut rng = AgentRng::new(seed, id);
            let color = rng.choose(agent_colors).copied().unwrap_or(palette[0]);
            let agent = Agent::spawn(id, &self.graph, &mut reservations, &mut sim_rng, rng)?
                .with_color(color);
            agents.push(agent);
        }

        log::info!(
            "simulation ready: {node_count} nodes, {} edges, {agent_count} agents, period {}",
            self.graph.edge_count(),
            self.config.movement_period,
        );

        Ok(Simulation::from_parts(self.config, self.graph, reservations, agents))
    }
}
