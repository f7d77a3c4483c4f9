//! Node graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its neighbours occupy the slice:
//!
//! ```text
//! adj[ adj_start[n] .. adj_start[n+1] ]
//! ```
//!
//! Each neighbour slice is sorted by ascending `NodeId` and never contains
//! `n` itself.  Edges are undirected: `b` is in `a`'s slice iff `a` is in
//! `b`'s slice, because both directions are decided by the same symmetric
//! distance test.
//!
//! # Edge construction
//!
//! An edge joins every pair of distinct nodes whose Euclidean distance is
//! `<= threshold`.  Candidate pairs come from an R-tree (via `rstar`) radius
//! query, so construction is O(N log N + E) instead of the naive O(N²) scan.
//! `Vec3::distance` is symmetric in its arguments, so both directions of a
//! pair always agree.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use nw_core::{NodeId, Vec3};

use crate::{GraphError, GraphResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 3-D `[x, y, z]` point with its `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 3],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance, used for candidate lookup only.
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── NodeGraph ─────────────────────────────────────────────────────────────────

/// Immutable node positions plus undirected CSR adjacency.
///
/// Built once at startup and read-only afterwards.  Do not construct
/// directly; use [`NodeGraph::build`] or [`NodeGraphBuilder`].
#[derive(Debug, Clone)]
pub struct NodeGraph {
    /// World position of each node.  Indexed by `NodeId`.
    node_pos: Vec<Vec3>,

    /// CSR row pointer.  Length = `node_count + 1`.
    adj_start: Vec<u32>,

    /// Concatenated, per-node sorted neighbour lists.
    adj: Vec<NodeId>,

    /// Distance threshold the edges were built with.
    threshold: f32,
}

impl NodeGraph {
    /// Build a graph from `nodes` (assigned `NodeId`s in iteration order),
    /// joining every pair closer than or equal to `edge_threshold`.
    ///
    /// # Errors
    ///
    /// [`GraphError::Empty`] if `nodes` is empty,
    /// [`GraphError::InvalidThreshold`] if the threshold is negative or not
    /// finite.
    pub fn build<I>(nodes: I, edge_threshold: f32) -> GraphResult<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut b = NodeGraphBuilder::new(edge_threshold);
        for pos in nodes {
            b.add_node(pos);
        }
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.len() / 2
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    // ── Node access ───────────────────────────────────────────────────────

    /// World position of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of range.  Ids handed out by this graph are
    /// always in range.
    #[inline]
    pub fn position(&self, node: NodeId) -> Vec3 {
        self.node_pos[node.index()]
    }

    /// All node positions, indexed by `NodeId`.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.node_pos
    }

    /// Neighbours of `node` in ascending `NodeId` order.
    ///
    /// This is a contiguous slice: no heap allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.adj_start[node.index()] as usize;
        let end   = self.adj_start[node.index() + 1] as usize;
        &self.adj[start..end]
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Return `node` unchanged if it belongs to this graph.
    pub fn check(&self, node: NodeId) -> GraphResult<NodeId> {
        if node.index() < self.node_count() {
            Ok(node)
        } else {
            Err(GraphError::NodeNotFound(node))
        }
    }

    /// Iterator over every `NodeId` in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map(NodeId::from_index)
    }
}

// ── NodeGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`NodeGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use nw_core::Vec3;
/// use nw_graph::NodeGraphBuilder;
///
/// let mut b = NodeGraphBuilder::new(50.0);
/// let a = b.add_node(Vec3::new(0.0, 0.0, 0.0));
/// let c = b.add_node(Vec3::new(40.0, 0.0, 0.0));
/// b.add_node(Vec3::new(200.0, 0.0, 0.0)); // too far from both
/// let g = b.build().unwrap();
/// assert_eq!(g.neighbors(a), &[c]);
/// assert_eq!(g.edge_count(), 1);
/// ```
pub struct NodeGraphBuilder {
    nodes:     Vec<Vec3>,
    threshold: f32,
}

impl NodeGraphBuilder {
    pub fn new(edge_threshold: f32) -> Self {
        Self { nodes: Vec::new(), threshold: edge_threshold }
    }

    /// Pre-allocate for the expected number of nodes.
    pub fn with_capacity(edge_threshold: f32, nodes: usize) -> Self {
        Self { nodes: Vec::with_capacity(nodes), threshold: edge_threshold }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Vec3) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(pos);
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`NodeGraph`].
    ///
    /// Time complexity: O(N log N) for the R-tree bulk load plus one radius
    /// query per node.
    pub fn build(self) -> GraphResult<NodeGraph> {
        if self.nodes.is_empty() {
            return Err(GraphError::Empty);
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(GraphError::InvalidThreshold(self.threshold));
        }

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, p)| NodeEntry { point: p.to_array(), id: NodeId::from_index(i) })
            .collect();
        let tree = RTree::bulk_load(entries);
        // The R-tree only narrows candidates; its squared-radius test can
        // round either way at the boundary, so query a little wide and
        // decide each edge on the plain distance below.
        let query_r = self.threshold * 1.001 + f32::EPSILON;
        let query_d2 = query_r * query_r;

        let node_count = self.nodes.len();
        let mut adj_start = Vec::with_capacity(node_count + 1);
        let mut adj       = Vec::new();
        let mut isolated  = 0usize;
        adj_start.push(0u32);

        let mut row: Vec<NodeId> = Vec::new();
        for (i, pos) in self.nodes.iter().enumerate() {
            let me = NodeId::from_index(i);
            row.clear();
            row.extend(
                tree.locate_within_distance(pos.to_array(), query_d2)
                    .map(|e| e.id)
                    .filter(|&id| id != me)
                    .filter(|&id| pos.distance(self.nodes[id.index()]) <= self.threshold),
            );
            row.sort_unstable();
            if row.is_empty() {
                isolated += 1;
            }
            adj.extend_from_slice(&row);
            adj_start.push(adj.len() as u32);
        }

        if isolated > 0 {
            log::warn!(
                "{isolated} of {node_count} nodes have no neighbours within {}",
                self.threshold
            );
        }
        log::debug!(
            "built node graph: {node_count} nodes, {} edges (threshold {})",
            adj.len() / 2,
            self.threshold
        );

        Ok(NodeGraph {
            node_pos: self.nodes,
            adj_start,
            adj,
            threshold: self.threshold,
        })
    }
}
