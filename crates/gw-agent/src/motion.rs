//! Continuous motion between cell centres.

use gw_core::Vec2;

/// Distance (world units) at which an agent counts as having reached its
/// target cell and snaps onto it.
pub const ARRIVAL_THRESHOLD: f32 = 0.05;

/// Result of one motion step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub position: Vec2,
    /// Direction of travel scaled to `speed`; zero when already at `to`.
    pub velocity: Vec2,
    pub arrived:  bool,
}

/// Move from `from` toward `to` by `speed * dt`, never past `to`.
///
/// A negative or NaN `dt` moves nothing.
pub fn step_toward(from: Vec2, to: Vec2, speed: f32, dt: f32) -> Step {
    let delta = to - from;
    let dist = delta.length();
    let travel = speed * dt.max(0.0);
    let velocity = delta.normalized() * speed;

    let position = if dist <= travel {
        to
    } else {
        from + delta.normalized() * travel
    };

    Step {
        position,
        velocity,
        arrived: position.within(to, ARRIVAL_THRESHOLD),
    }
}
