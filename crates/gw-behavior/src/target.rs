//! The entity chase agents pursue.

use gw_core::Vec2;

/// Read-only view of the tracked target (typically the player).
///
/// Agents never hold a live reference to the target; the simulation copies
/// it into a [`TargetSnapshot`] once per frame and hands every agent the
/// same snapshot.
pub trait TrackedTarget {
    /// Current world position.
    fn position(&self) -> Vec2;

    /// `true` once the target has finished its own objective.
    fn has_reached_goal(&self) -> bool;

    /// `true` while the target is disabled or not yet spawned.
    fn is_inactive(&self) -> bool;

    /// Agents only act while this holds.
    #[inline]
    fn is_active(&self) -> bool {
        !self.has_reached_goal() && !self.is_inactive()
    }
}

/// Plain-value copy of a [`TrackedTarget`] for one frame.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSnapshot {
    pub position:     Vec2,
    pub reached_goal: bool,
    pub inactive:     bool,
}

impl TargetSnapshot {
    /// An active target at `position`.
    pub fn at(position: Vec2) -> Self {
        Self { position, reached_goal: false, inactive: false }
    }

    /// Copy the current state of any tracked target.
    pub fn capture<T: TrackedTarget + ?Sized>(target: &T) -> Self {
        Self {
            position:     target.position(),
            reached_goal: target.has_reached_goal(),
            inactive:     target.is_inactive(),
        }
    }
}

impl TrackedTarget for TargetSnapshot {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn has_reached_goal(&self) -> bool {
        self.reached_goal
    }

    fn is_inactive(&self) -> bool {
        self.inactive
    }
}
