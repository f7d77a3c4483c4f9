//! Unit tests for nw-graph.
//!
//! All tests use small hand-placed node sets or tiny grids.

#[cfg(test)]
mod helpers {
    use nw_core::Vec3;

    use crate::{GridLayout, NodeGraph};

    /// 3 × 3 grid, spacing 40, threshold 40·√3.
    ///
    /// Ids (x outer, y inner):
    ///   2 5 8
    ///   1 4 7
    ///   0 3 6
    pub fn grid3() -> NodeGraph {
        let layout = GridLayout::new(40, 40);
        NodeGraph::build(layout.positions(), layout.edge_threshold()).unwrap()
    }

    /// Three nodes on a line, 40 apart, threshold 40: 0 - 1 - 2.
    pub fn line3() -> NodeGraph {
        NodeGraph::build(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(40.0, 0.0, 0.0),
                Vec3::new(80.0, 0.0, 0.0),
            ],
            40.0,
        )
        .unwrap()
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod build {
    use nw_core::{NodeId, Vec3};

    use crate::{GraphError, NodeGraph, NodeGraphBuilder};

    #[test]
    fn empty_is_rejected() {
        let err = NodeGraphBuilder::new(10.0).build().unwrap_err();
        assert!(matches!(err, GraphError::Empty));
    }

    #[test]
    fn bad_threshold_is_rejected() {
        for t in [-1.0, f32::NAN, f32::INFINITY] {
            let r = NodeGraph::build([Vec3::ZERO], t);
            assert!(matches!(r, Err(GraphError::InvalidThreshold(_))), "threshold {t}");
        }
    }

    #[test]
    fn single_node_has_no_neighbours() {
        let g = NodeGraph::build([Vec3::ZERO], 100.0).unwrap();
        assert_eq!(g.node_count(), 1);
        assert!(g.neighbors(NodeId(0)).is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let g = super::helpers::line3();
        assert_eq!(g.neighbors(NodeId(0)), &[NodeId(1)]);
        assert_eq!(g.neighbors(NodeId(1)), &[NodeId(0), NodeId(2)]);
        assert_eq!(g.neighbors(NodeId(2)), &[NodeId(1)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn threshold_equal_to_distance_connects() {
        use rand::{Rng, SeedableRng};
        use rand::rngs::SmallRng;

        // Squaring both sides in f32 loses the boundary for a sizeable share
        // of arbitrary pairs; every one of these must still get its edge.
        let mut rng = SmallRng::seed_from_u64(7);
        let mut coord = || Vec3::new(
            rng.gen_range(-5000.0..5000.0),
            rng.gen_range(-5000.0..5000.0),
            rng.gen_range(-5000.0..5000.0),
        );
        for _ in 0..2000 {
            let (a, b) = (coord(), coord());
            let d = a.distance(b);
            let g = NodeGraph::build([a, b], d).unwrap();
            assert_eq!(g.neighbors(NodeId(0)), &[NodeId(1)], "a={a} b={b} d={d}");
            assert_eq!(g.neighbors(NodeId(1)), &[NodeId(0)], "a={a} b={b} d={d}");
        }
    }

    #[test]
    fn just_beyond_threshold_stays_apart() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(40.0, 0.0, 0.0);
        let g = NodeGraph::build([a, b], 39.999).unwrap();
        assert!(g.neighbors(NodeId(0)).is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn builder_assigns_sequential_ids() {
        let mut b = NodeGraphBuilder::with_capacity(1.0, 3);
        assert_eq!(b.add_node(Vec3::ZERO), NodeId(0));
        assert_eq!(b.add_node(Vec3::X), NodeId(1));
        assert_eq!(b.node_count(), 2);
        let g = b.build().unwrap();
        assert_eq!(g.position(NodeId(1)), Vec3::X);
        assert_eq!(g.threshold(), 1.0);
    }

    #[test]
    fn check_rejects_out_of_range() {
        let g = super::helpers::line3();
        assert_eq!(g.check(NodeId(2)).unwrap(), NodeId(2));
        assert!(matches!(g.check(NodeId(3)), Err(GraphError::NodeNotFound(NodeId(3)))));
    }
}

// ── Grid topology ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod topology {
    use nw_core::NodeId;

    #[test]
    fn corner_and_centre_degrees() {
        let g = super::helpers::grid3();
        assert_eq!(g.node_count(), 9);
        assert_eq!(g.neighbors(NodeId(0)), &[NodeId(1), NodeId(3), NodeId(4)]);
        assert_eq!(g.degree(NodeId(4)), 8);
        assert_eq!(g.degree(NodeId(1)), 5); // edge midpoint
        // 12 orthogonal + 8 diagonal
        assert_eq!(g.edge_count(), 20);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let g = super::helpers::grid3();
        for a in g.nodes() {
            for &b in g.neighbors(a) {
                assert!(g.neighbors(b).contains(&a), "{b} missing back-edge to {a}");
            }
        }
    }

    #[test]
    fn no_self_loops() {
        let g = super::helpers::grid3();
        for a in g.nodes() {
            assert!(!g.neighbors(a).contains(&a));
        }
    }

    #[test]
    fn neighbour_lists_are_sorted() {
        let g = super::helpers::grid3();
        for a in g.nodes() {
            assert!(g.neighbors(a).windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn full_grid_symmetry_and_degrees() {
        let layout = crate::GridLayout::default();
        let g = crate::NodeGraph::build(layout.positions(), layout.edge_threshold()).unwrap();
        assert_eq!(g.node_count(), 225);
        for a in g.nodes() {
            let d = g.degree(a);
            assert!((3..=8).contains(&d), "{a} has degree {d}");
            for &b in g.neighbors(a) {
                assert!(g.neighbors(b).contains(&a));
            }
        }
    }
}

// ── GridLayout ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use nw_core::Vec3;

    use crate::GridLayout;

    #[test]
    fn default_is_fifteen_square() {
        let l = GridLayout::default();
        assert_eq!(l.side(), 15);
        assert_eq!(l.node_count(), 225);
        let pos = l.positions();
        assert_eq!(pos[0], Vec3::new(-280.0, -280.0, 0.0));
        assert_eq!(pos[1], Vec3::new(-280.0, -240.0, 0.0));
        assert_eq!(pos[224], Vec3::new(280.0, 280.0, 0.0));
    }

    #[test]
    fn threshold_spans_diagonal_only() {
        let l = GridLayout::new(40, 40);
        let t = l.edge_threshold();
        assert!((t - 69.282).abs() < 1e-2);
        assert!(t > 40.0 * 2f32.sqrt());
        assert!(t < 80.0);
    }

    #[test]
    fn degenerate_span_is_empty() {
        assert_eq!(GridLayout::new(100, 0).node_count(), 0);
        assert!(GridLayout::new(-5, 10).positions().is_empty());
    }

    #[test]
    fn extreme_extent_does_not_overflow() {
        let l = GridLayout::new(i32::MAX, i32::MAX);
        assert_eq!(l.side(), 3);
        let pos = l.positions();
        assert_eq!(pos.len(), 9);
        assert_eq!(pos[0], Vec3::new(-(i32::MAX as f32), -(i32::MAX as f32), 0.0));
        assert_eq!(pos[4], Vec3::ZERO);
        assert_eq!(pos[8], Vec3::new(i32::MAX as f32, i32::MAX as f32, 0.0));

        let wide = GridLayout::new(i32::MAX, 1 << 30);
        assert_eq!(wide.side(), 4);
        assert_eq!(wide.positions().len(), 16);
    }
}
