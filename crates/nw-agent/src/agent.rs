//! The `Agent` state machine.

use nw_core::{AgentId, AgentRng, NodeId, Rgb, SOFT_GREEN, SimRng, Tick, Vec3};
use nw_graph::NodeGraph;
use nw_reserve::ReservationWindow;

use crate::{AgentError, AgentResult, Decision, Marker, MoveState, Trail};

/// One walker on the node graph.
///
/// The agent is **idle** when `current_node == target_node` and
/// **transiting** otherwise.  Both nodes are plain indices into the graph;
/// agents never refer to each other.
#[derive(Clone, Debug)]
pub struct Agent {
    id:       AgentId,
    /// Node being departed from, or stood on when idle.
    current:  NodeId,
    /// Node being walked to.  Equals `current` when idle.
    target:   NodeId,
    position: Vec3,
    color:    Rgb,
    trail:    Trail,
    rng:      AgentRng,
}

impl Agent {
    // ── Construction ──────────────────────────────────────────────────────

    /// Spawn on a uniformly random unreserved node.
    ///
    /// The candidate comes from the shared `sim_rng`; see
    /// [`spawn_at`](Self::spawn_at) for the probing rule.
    pub fn spawn(
        id:           AgentId,
        graph:        &NodeGraph,
        reservations: &mut ReservationWindow,
        sim_rng:      &mut SimRng,
        rng:          AgentRng,
    ) -> AgentResult<Self> {
        let candidate = NodeId::from_index(sim_rng.index(graph.node_count()));
        Self::spawn_at(id, candidate, graph, reservations, rng)
    }

    /// Spawn at the first unreserved node at or after `candidate`, probing
    /// forward and wrapping past the last node.  The chosen node is reserved
    /// and becomes both the current and the target node.
    ///
    /// # Errors
    ///
    /// [`AgentError::Graph`] if `candidate` is not in `graph`,
    /// [`AgentError::NoFreeNode`] if every node is already reserved.
    pub fn spawn_at(
        id:           AgentId,
        candidate:    NodeId,
        graph:        &NodeGraph,
        reservations: &mut ReservationWindow,
        rng:          AgentRng,
    ) -> AgentResult<Self> {
        let candidate = graph.check(candidate)?;
        let n = graph.node_count();

        let node = (0..n)
            .map(|step| NodeId::from_index((candidate.index() + step) % n))
            .find(|&node| !reservations.is_reserved(node))
            .ok_or(AgentError::NoFreeNode { nodes: n })?;

        reservations.reserve(node);
        log::trace!("{id} spawned at {node} (candidate {candidate})");

        Ok(Self {
            id,
            current:  node,
            target:   node,
            position: graph.position(node),
            color:    SOFT_GREEN[0],
            trail:    Trail::new(),
            rng,
        })
    }

    /// Replace the colour tag.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Advance one tick.
    ///
    /// On the first tick of a movement cycle the agent arrives at its target
    /// and picks the next one, starting the neighbour scan at a random slot.
    /// Every tick it then recomputes its interpolated position and records it
    /// in the trail.  Returns the re-selection outcome on cycle-start ticks.
    pub fn update(
        &mut self,
        movement_period: u32,
        graph:           &NodeGraph,
        reservations:    &mut ReservationWindow,
        tick:            Tick,
    ) -> Option<Decision> {
        let slot = if tick.is_cycle_start(movement_period) {
            match graph.degree(self.target) {
                0 => 0,
                d => self.rng.index(d),
            }
        } else {
            0
        };
        self.update_with(slot, movement_period, graph, reservations, tick)
    }

    /// [`update`](Self::update) with the starting neighbour slot fixed by
    /// the caller.  `slot` is taken modulo the degree of the node being
    /// arrived at and ignored on ticks that do not start a cycle.
    pub fn update_with(
        &mut self,
        slot:            usize,
        movement_period: u32,
        graph:           &NodeGraph,
        reservations:    &mut ReservationWindow,
        tick:            Tick,
    ) -> Option<Decision> {
        let decision = tick
            .is_cycle_start(movement_period)
            .then(|| self.reselect(slot, graph, reservations));

        self.interpolate(movement_period, graph, tick);
        self.trail.push(self.position);
        decision
    }

    /// Arrive at the target and claim the next one.
    fn reselect(
        &mut self,
        slot:         usize,
        graph:        &NodeGraph,
        reservations: &mut ReservationWindow,
    ) -> Decision {
        let previous = self.current;
        self.current = self.target;

        let neighbors = graph.neighbors(self.current);
        let degree = neighbors.len();
        let mut slot = if degree == 0 { 0 } else { slot % degree };

        for _ in 0..degree {
            let candidate = neighbors[slot];
            if candidate != previous && !reservations.is_reserved(candidate) {
                reservations.reserve(candidate);
                self.target = candidate;
                log::trace!("{} heads {} -> {}", self.id, self.current, candidate);
                return Decision::Moved { from: self.current, to: candidate };
            }
            slot = (slot + 1) % degree;
        }

        // Starved: stay put.  The node may already be claimed; the duplicate
        // claim is kept and expires with the rest of the cycle's claims.
        reservations.reserve(self.current);
        self.target = self.current;
        log::trace!("{} stays at {}", self.id, self.current);
        Decision::Stayed { at: self.current }
    }

    fn interpolate(&mut self, movement_period: u32, graph: &NodeGraph, tick: Tick) {
        let t = tick.phase(movement_period) as f32 / movement_period as f32;
        let from = graph.position(self.current);
        let to   = graph.position(self.target);
        self.position = from + (to - from) * t;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn current_node(&self) -> NodeId {
        self.current
    }

    #[inline]
    pub fn target_node(&self) -> NodeId {
        self.target
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Newest-first position history, at most [`TRAIL_LEN`](crate::TRAIL_LEN)
    /// long.
    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current == self.target
    }

    pub fn marker(&self) -> Option<Marker> {
        Marker::from_trail(&self.trail)
    }

    /// Movement view at `tick`.
    pub fn state(&self, tick: Tick, movement_period: u32) -> MoveState {
        if self.is_idle() {
            MoveState::Idle { at: self.current }
        } else {
            MoveState::Transiting {
                from:     self.current,
                to:       self.target,
                progress: tick.phase(movement_period) as f32 / movement_period as f32,
            }
        }
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            id:       self.id,
            position: self.position,
            trail:    self.trail.to_vec(),
            color:    self.color,
            marker:   self.marker(),
        }
    }
}

/// Owned copy of everything a renderer reads from one agent.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id:       AgentId,
    pub position: Vec3,
    /// Newest first.
    pub trail:    Vec<Vec3>,
    pub color:    Rgb,
    pub marker:   Option<Marker>,
}
