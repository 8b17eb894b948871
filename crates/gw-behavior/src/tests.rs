//! Unit tests for gw-behavior.

use gw_core::{CellId, GridCoord, Vec2};
use gw_grid::{GridMap, GridMapBuilder};

use crate::{DecisionContext, TargetSnapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open_map(width: u32, height: u32) -> GridMap {
    GridMapBuilder::new(width, height).build().unwrap()
}

fn cell(map: &GridMap, x: i32, y: i32) -> CellId {
    map.cell_at(GridCoord::new(x, y)).unwrap()
}

fn context(map: &GridMap, agent: Vec2, target: Vec2, vision: f32) -> DecisionContext<'_> {
    let current = map.nearest_cell(agent).unwrap();
    DecisionContext::new(map, agent, current, TargetSnapshot::at(target), vision)
}

// ── Markers & kinds ───────────────────────────────────────────────────────────

#[cfg(test)]
mod kind_tests {
    use crate::{BehaviorError, BehaviorKind, Marker};

    #[test]
    fn markers_per_kind() {
        assert_eq!(BehaviorKind::Wander.marker(), Marker::White);
        assert_eq!(BehaviorKind::ChaseDirect.marker(), Marker::Red);
        assert_eq!(BehaviorKind::ChaseOffset.marker(), Marker::Blue);
    }

    #[test]
    fn only_chasers_pursue() {
        assert!(!BehaviorKind::Wander.is_pursuit());
        assert!(BehaviorKind::ChaseDirect.is_pursuit());
        assert!(BehaviorKind::ChaseOffset.is_pursuit());
    }

    #[test]
    fn default_walk_steps() {
        assert_eq!(BehaviorKind::Wander.default_walk_steps(), 20);
        assert_eq!(BehaviorKind::ChaseDirect.default_walk_steps(), 10);
        assert_eq!(BehaviorKind::ChaseOffset.default_walk_steps(), 10);
    }

    #[test]
    fn built_selector_reports_kind_and_marker() {
        for kind in [BehaviorKind::Wander, BehaviorKind::ChaseDirect, BehaviorKind::ChaseOffset] {
            let sel = kind.build_selector(2.0).unwrap();
            assert_eq!(sel.kind(), kind);
            assert_eq!(sel.marker(), kind.marker());
            assert_eq!(sel.is_pursuit(), kind.is_pursuit());
        }
    }

    #[test]
    fn non_finite_offset_rejected() {
        assert!(matches!(
            BehaviorKind::ChaseOffset.build_selector(f32::NAN),
            Err(BehaviorError::InvalidOffset(_))
        ));
        assert!(matches!(
            BehaviorKind::ChaseOffset.build_selector(f32::INFINITY),
            Err(BehaviorError::InvalidOffset(o)) if o == f32::INFINITY
        ));
        // Other kinds ignore the offset.
        assert!(BehaviorKind::ChaseDirect.build_selector(f32::NAN).is_ok());
    }

    #[test]
    fn display_names() {
        assert_eq!(BehaviorKind::ChaseOffset.to_string(), "chase_offset");
        assert_eq!(Marker::Red.to_string(), "red");
    }
}

// ── Tracked target ────────────────────────────────────────────────────────────

#[cfg(test)]
mod target_tests {
    use gw_core::Vec2;

    use crate::{TargetSnapshot, TrackedTarget};

    struct Player {
        pos:  Vec2,
        done: bool,
    }

    impl TrackedTarget for Player {
        fn position(&self) -> Vec2 {
            self.pos
        }
        fn has_reached_goal(&self) -> bool {
            self.done
        }
        fn is_inactive(&self) -> bool {
            false
        }
    }

    #[test]
    fn capture_copies_state() {
        let p = Player { pos: Vec2::new(3.0, 4.0), done: true };
        let snap = TargetSnapshot::capture(&p);
        assert_eq!(snap.position, Vec2::new(3.0, 4.0));
        assert!(snap.reached_goal);
        assert!(!snap.is_active());
    }

    #[test]
    fn active_only_when_neither_flag_set() {
        let mut snap = TargetSnapshot::at(Vec2::ZERO);
        assert!(snap.is_active());
        snap.inactive = true;
        assert!(!snap.is_active());
        snap.inactive = false;
        snap.reached_goal = true;
        assert!(!snap.is_active());
    }
}

// ── Goal selection ────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection_tests {
    use gw_core::{GridCoord, Vec2};
    use gw_grid::GridMapBuilder;

    use super::{cell, context, open_map};
    use crate::{ChaseDirect, ChaseOffset, Goal, GoalSelector, Wander};

    #[test]
    fn wander_ignores_visible_target() {
        let map = open_map(5, 5);
        let ctx = context(&map, Vec2::ZERO, Vec2::new(1.0, 0.0), 100.0);
        assert_eq!(Wander.select_goal(&ctx), Goal::Wander);
    }

    #[test]
    fn chase_direct_pursues_nearest_cell() {
        let map = open_map(10, 10);
        let ctx = context(&map, Vec2::ZERO, Vec2::new(5.2, 0.1), 10.0);
        assert_eq!(ChaseDirect.select_goal(&ctx), Goal::Pursue(cell(&map, 5, 0)));
    }

    #[test]
    fn chase_direct_out_of_vision_wanders() {
        let map = open_map(10, 10);
        let ctx = context(&map, Vec2::ZERO, Vec2::new(5.0, 0.0), 4.9);
        assert_eq!(ChaseDirect.select_goal(&ctx), Goal::Wander);
    }

    #[test]
    fn vision_boundary_is_inclusive() {
        let map = open_map(10, 10);
        let ctx = context(&map, Vec2::ZERO, Vec2::new(3.0, 4.0), 5.0);
        assert!(ctx.target_in_vision());
        assert_eq!(ChaseDirect.select_goal(&ctx), Goal::Pursue(cell(&map, 3, 4)));
    }

    #[test]
    fn zero_vision_sees_only_coincident_target() {
        let map = open_map(4, 4);
        let ctx = context(&map, Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), 0.0);
        assert!(ctx.target_in_vision());
        let ctx = context(&map, Vec2::new(1.0, 1.0), Vec2::new(1.0, 2.0), 0.0);
        assert!(!ctx.target_in_vision());
    }

    #[test]
    fn chase_direct_may_pick_blocked_cell() {
        let mut b = GridMapBuilder::new(5, 1);
        b.block(GridCoord::new(4, 0)).unwrap();
        let map = b.build().unwrap();
        let ctx = context(&map, Vec2::ZERO, Vec2::new(4.0, 0.0), 10.0);
        assert_eq!(ChaseDirect.select_goal(&ctx), Goal::Pursue(cell(&map, 4, 0)));
    }

    #[test]
    fn chase_offset_aims_along_positive_x() {
        let map = open_map(10, 10);
        let ctx = context(&map, Vec2::ZERO, Vec2::new(4.1, 3.0), 10.0);
        let sel = ChaseOffset::default();
        assert_eq!(sel.offset(), 2.0);
        assert_eq!(sel.select_goal(&ctx), Goal::Pursue(cell(&map, 6, 3)));
    }

    #[test]
    fn chase_offset_snaps_to_walkable() {
        // Target at (2,0); aim (4,0) is blocked, so (3,0) is the nearest
        // walkable cell to the aim point.
        let map = GridMapBuilder::from_ascii("....#\n.....").unwrap().build().unwrap();
        let ctx = context(&map, Vec2::ZERO, Vec2::new(2.0, 0.0), 10.0);
        let goal = ChaseOffset::new(2.0).unwrap().select_goal(&ctx);
        assert!(
            goal == Goal::Pursue(cell(&map, 3, 0)) || goal == Goal::Pursue(cell(&map, 4, 1)),
            "unexpected {goal:?}"
        );
    }

    #[test]
    fn chase_offset_past_edge_clamps_to_border() {
        let map = open_map(5, 5);
        let ctx = context(&map, Vec2::ZERO, Vec2::new(4.0, 2.0), 10.0);
        let goal = ChaseOffset::new(3.0).unwrap().select_goal(&ctx);
        assert_eq!(goal, Goal::Pursue(cell(&map, 4, 2)));
    }

    #[test]
    fn chase_offset_out_of_vision_wanders() {
        let map = open_map(10, 10);
        let ctx = context(&map, Vec2::ZERO, Vec2::new(9.0, 9.0), 2.0);
        assert_eq!(ChaseOffset::default().select_goal(&ctx), Goal::Wander);
    }
}
