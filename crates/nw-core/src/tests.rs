//! Unit tests for nw-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::from_index(42), id);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(AgentId(0).to_string(), "AgentId(0)");
    }

    #[test]
    fn handles_order_by_list_position() {
        let mut ids = vec![NodeId(5), NodeId::from_index(1), NodeId(3)];
        ids.sort();
        assert_eq!(ids, [NodeId(1), NodeId(3), NodeId(5)]);
        assert!(NodeId(224) < NodeId::INVALID);
        assert_eq!(usize::from(AgentId(9)), AgentId(9).index());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn phase_wraps_at_period() {
        assert_eq!(Tick(0).phase(20), 0);
        assert_eq!(Tick(10).phase(20), 10);
        assert_eq!(Tick(19).phase(20), 19);
        assert_eq!(Tick(20).phase(20), 0);
        assert_eq!(Tick(47).phase(20), 7);
    }

    #[test]
    fn cycle_start() {
        assert!(Tick(0).is_cycle_start(20));
        assert!(Tick(40).is_cycle_start(20));
        assert!(!Tick(41).is_cycle_start(20));
        // Period 1: every tick starts a cycle.
        assert!(Tick(13).is_cycle_start(1));
    }

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(10).offset(3), Tick(13));
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.movement_period, 20);
        assert_eq!(cfg.end_tick(), Tick(cfg.total_ticks));
    }

    #[test]
    fn zero_period_rejected() {
        let cfg = SimConfig { movement_period: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_agents_rejected() {
        let cfg = SimConfig { agent_count: 0, ..SimConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("agent_count"));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(7, AgentId(3));
        let mut b = AgentRng::new(7, AgentId(3));
        for _ in 0..32 {
            assert_eq!(a.index(1000), b.index(1000));
        }
    }

    #[test]
    fn agents_get_distinct_streams() {
        let mut a = AgentRng::new(7, AgentId(0));
        let mut b = AgentRng::new(7, AgentId(1));
        let xs: Vec<usize> = (0..16).map(|_| a.index(1_000_000)).collect();
        let ys: Vec<usize> = (0..16).map(|_| b.index(1_000_000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn index_in_range() {
        let mut rng = SimRng::new(1);
        for _ in 0..1000 {
            assert!(rng.index(9) < 9);
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(1, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5u8]), Some(&5));
    }

    #[test]
    fn cloned_agent_rng_replays() {
        let mut a = AgentRng::new(11, AgentId(2));
        a.index(10);
        let mut b = a.clone();
        for _ in 0..16 {
            assert_eq!(a.index(64), b.index(64));
        }
    }
}

#[cfg(test)]
mod color {
    use crate::{Rgb, SOFT_GREEN};

    #[test]
    fn display_hex() {
        assert_eq!(Rgb::new(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn background_is_last() {
        assert_eq!(*SOFT_GREEN.last().unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn to_f32_scales() {
        assert_eq!(Rgb::new(255, 0, 0).to_f32(), [1.0, 0.0, 0.0]);
    }
}
