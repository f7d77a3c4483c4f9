//! Unit tests for nw-reserve.

#[cfg(test)]
mod window {
    use nw_core::NodeId;

    use crate::ReservationWindow;

    fn ids(w: &ReservationWindow) -> Vec<u32> {
        w.iter().map(|n| n.0).collect()
    }

    #[test]
    fn new_is_empty() {
        let w = ReservationWindow::new();
        assert!(w.is_empty());
        assert_eq!(w.size(), 0);
        assert!(!w.is_reserved(NodeId(0)));
    }

    #[test]
    fn reserve_appends_in_order() {
        let mut w = ReservationWindow::with_capacity(4);
        w.reserve(NodeId(4));
        w.reserve(NodeId(1));
        w.reserve(NodeId(7));
        assert_eq!(ids(&w), vec![4, 1, 7]);
        assert!(w.is_reserved(NodeId(1)));
        assert!(!w.is_reserved(NodeId(2)));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut w = ReservationWindow::new();
        w.reserve(NodeId(3));
        w.reserve(NodeId(3));
        assert_eq!(w.size(), 2);
        assert_eq!(w.distinct(), 1);
        assert_eq!(w.count_of(NodeId(3)), 2);
    }

    #[test]
    fn duplicate_survives_partial_eviction() {
        let mut w = ReservationWindow::new();
        w.reserve(NodeId(3));
        w.reserve(NodeId(5));
        w.reserve(NodeId(3));
        w.evict_prefix(1);
        assert!(w.is_reserved(NodeId(3)));
        assert_eq!(w.count_of(NodeId(3)), 1);
        w.evict_prefix(2);
        assert!(!w.is_reserved(NodeId(3)));
        assert!(w.is_empty());
        assert_eq!(w.distinct(), 0);
    }

    #[test]
    fn evict_exact_prefix_keeps_later_claims() {
        let mut w = ReservationWindow::new();
        for n in [0, 1, 2] {
            w.reserve(NodeId(n));
        }
        let snapshot = w.size();
        // Claims made after the snapshot, including one repeating an old id.
        for n in [9, 8, 0, 7] {
            w.reserve(NodeId(n));
        }
        w.evict_prefix(snapshot);
        assert_eq!(ids(&w), vec![9, 8, 0, 7]);
        assert!(w.is_reserved(NodeId(0)));
        assert!(!w.is_reserved(NodeId(1)));
        assert!(!w.is_reserved(NodeId(2)));
    }

    #[test]
    fn evict_zero_is_noop() {
        let mut w = ReservationWindow::new();
        w.reserve(NodeId(1));
        w.evict_prefix(0);
        assert_eq!(ids(&w), vec![1]);
    }

    #[test]
    fn evict_more_than_len_clears() {
        let mut w = ReservationWindow::new();
        w.reserve(NodeId(1));
        w.reserve(NodeId(2));
        w.evict_prefix(10);
        assert!(w.is_empty());
        assert!(!w.is_reserved(NodeId(1)));
    }

    #[test]
    fn count_index_matches_linear_scan() {
        let mut w = ReservationWindow::new();
        let seq = [5, 2, 5, 9, 2, 2, 0, 5, 1];
        for (i, &n) in seq.iter().enumerate() {
            w.reserve(NodeId(n));
            if i % 3 == 2 {
                w.evict_prefix(2);
            }
            for probe in 0..10 {
                let linear = w.iter().any(|x| x == NodeId(probe));
                assert_eq!(w.is_reserved(NodeId(probe)), linear, "probe {probe} after step {i}");
                let c = w.iter().filter(|&x| x == NodeId(probe)).count() as u32;
                assert_eq!(w.count_of(NodeId(probe)), c);
            }
        }
    }
}
