//! Unit tests for gw-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CellId};

    #[test]
    fn index_roundtrip() {
        let id = CellId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CellId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(CellId::INVALID.0, u32::MAX);
        assert!(!CellId::default().is_valid());
        assert!(CellId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(CellId(3).to_string(), "CellId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GridCoord, Vec2};

    #[test]
    fn distance_and_within() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!(a.within(b, 5.0));
        assert!(!a.within(b, 4.99));
    }

    #[test]
    fn normalized_is_unit_or_zero() {
        let v = Vec2::new(10.0, 0.0).normalized();
        assert_eq!(v, Vec2::new(1.0, 0.0));
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        let d = Vec2::new(-2.0, 2.0).normalized();
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn vector_ops() {
        let v = Vec2::new(1.0, 2.0) + Vec2::new(0.5, -1.0);
        assert_eq!(v, Vec2::new(1.5, 1.0));
        assert_eq!(v - Vec2::new(1.5, 1.0), Vec2::ZERO);
        assert_eq!(Vec2::new(1.0, -1.0) * 2.0, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn manhattan_and_adjacency() {
        let a = GridCoord::new(0, 0);
        assert_eq!(a.manhattan(GridCoord::new(3, -4)), 7);
        assert!(a.is_adjacent(GridCoord::new(0, 1)));
        assert!(!a.is_adjacent(GridCoord::new(1, 1)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn neighbor_order_is_fixed() {
        let n: Vec<_> = GridCoord::new(5, 5).neighbors().collect();
        assert_eq!(
            n,
            vec![
                GridCoord::new(6, 5),
                GridCoord::new(4, 5),
                GridCoord::new(5, 6),
                GridCoord::new(5, 4),
            ]
        );
    }
}

#[cfg(test)]
mod time {
    use crate::{Frame, FrameClock, SimConfig};

    #[test]
    fn clock_advances_frame_and_seconds() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.current_frame, Frame(2));
        assert!((clock.elapsed_secs - 0.75).abs() < 1e-9);
    }

    #[test]
    fn snapshot_interval() {
        let cfg = SimConfig { output_interval_frames: 10, ..SimConfig::default() };
        assert!(cfg.is_snapshot_frame(Frame(0)));
        assert!(!cfg.is_snapshot_frame(Frame(5)));
        assert!(cfg.is_snapshot_frame(Frame(20)));

        let off = SimConfig { output_interval_frames: 0, ..SimConfig::default() };
        assert!(!off.is_snapshot_frame(Frame(0)));
    }

    #[test]
    fn end_frame() {
        let cfg = SimConfig { total_frames: 42, ..SimConfig::default() };
        assert_eq!(cfg.end_frame(), Frame(42));
        assert_eq!(Frame(40) + 2, cfg.end_frame());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(99, AgentId(3));
        let mut b = AgentRng::new(99, AgentId(3));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(99, AgentId(0));
        let mut b = AgentRng::new(99, AgentId(1));
        let sa: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let sb: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut r = AgentRng::from_seed(1);
        let empty: [u8; 0] = [];
        assert!(r.choose(&empty).is_none());
        assert_eq!(r.choose(&[7]), Some(&7));
    }
}
