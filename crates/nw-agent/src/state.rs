//! Read-only views of an agent's movement.

use nw_core::NodeId;

/// Where an agent is within the current movement cycle.
///
/// Derived from `current_node`, `target_node` and the tick; the agent never
/// stores it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveState {
    /// `current_node == target_node`.
    Idle { at: NodeId },

    /// Walking from `from` to `to`; `progress` is in `[0.0, 1.0)`.
    Transiting { from: NodeId, to: NodeId, progress: f32 },
}

impl MoveState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, MoveState::Idle { .. })
    }
}

/// Outcome of one destination re-selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Claimed a free neighbour.
    Moved { from: NodeId, to: NodeId },

    /// No usable neighbour; re-claimed the current node.
    Stayed { at: NodeId },
}

impl Decision {
    #[inline]
    pub fn target(&self) -> NodeId {
        match *self {
            Decision::Moved { to, .. } => to,
            Decision::Stayed { at } => at,
        }
    }

    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Decision::Stayed { .. })
    }
}
