//! The per-tick state machine.
//!
//! One call to [`Agent::tick`] performs one transition.  Planner calls
//! happen only here: a random walk when wandering needs a fresh route, a
//! shortest path when the selector returns a pursuit goal.

use gw_behavior::{Goal, TargetSnapshot, TrackedTarget};
use gw_core::CellId;
use gw_grid::{Route, RoutePlanner};

use crate::motion;
use crate::{Agent, AgentState};

/// What a single [`Agent::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Target inactive or finished; nothing ran.
    Frozen,
    /// Stayed in DECIDING: no walk available, or the pursuit goal is the
    /// current cell.
    Waiting,
    /// Planned a pursuit route and entered CHASING.
    Planned,
    /// CHASING with nothing left to follow; back to DECIDING.
    RouteExhausted,
    /// Took the next route cell as target and entered MOVING.
    Departed(CellId),
    /// Moved toward the target cell without reaching it.
    Moving,
    /// Snapped onto the target cell.
    Arrived(CellId),
}

impl Agent {
    /// Advance this agent by one tick of `dt` seconds.
    ///
    /// The tracked target is read through a per-frame snapshot; when it has
    /// reached its goal or is inactive the agent is frozen for the tick.
    pub fn tick<P>(&mut self, planner: &P, target: &TargetSnapshot, dt: f32) -> TickOutcome
    where
        P: RoutePlanner + ?Sized,
    {
        if !target.is_active() {
            return TickOutcome::Frozen;
        }
        match self.state {
            AgentState::Deciding => self.decide(planner, target),
            AgentState::Chasing  => self.follow_route(),
            AgentState::Moving   => self.advance(planner, target, dt),
        }
    }

    // ── DECIDING ──────────────────────────────────────────────────────────

    fn decide<P: RoutePlanner + ?Sized>(&mut self, planner: &P, target: &TargetSnapshot) -> TickOutcome {
        self.marker = self.selector.marker();

        let goal = self.selector.select_goal(&self.decision_context(target));
        match goal {
            Goal::Wander => self.wander(planner),
            Goal::Pursue(cell) if cell == self.current => TickOutcome::Waiting,
            Goal::Pursue(cell) if self.unreachable == Some(cell) => self.wander(planner),
            Goal::Pursue(cell) => {
                let route = planner.shortest_path(&self.map, self.current, cell);
                if route.is_empty() {
                    tracing::debug!(agent = %self.id, goal = %cell, "pursuit goal unreachable; wandering");
                    self.unreachable = Some(cell);
                    return self.wander(planner);
                }
                tracing::debug!(agent = %self.id, goal = %cell, len = route.len(), "pursuit route planned");
                self.route = route;
                self.transition(AgentState::Chasing);
                TickOutcome::Planned
            }
        }
    }

    /// Follow the current route, drawing a fresh random walk when it is
    /// empty.
    fn wander<P: RoutePlanner + ?Sized>(&mut self, planner: &P) -> TickOutcome {
        if self.route.is_empty() {
            self.route = planner.random_walk(
                &self.map,
                self.current,
                self.config.walk_steps(),
                &mut self.rng,
            );
        }
        match self.route.pop_front() {
            Some(next) => self.depart(next),
            None => TickOutcome::Waiting,
        }
    }

    // ── CHASING ───────────────────────────────────────────────────────────

    fn follow_route(&mut self) -> TickOutcome {
        match self.route.pop_front() {
            Some(next) => self.depart(next),
            None => {
                self.transition(AgentState::Deciding);
                TickOutcome::RouteExhausted
            }
        }
    }

    fn depart(&mut self, next: CellId) -> TickOutcome {
        self.target = Some(next);
        self.velocity = (self.map.position(next) - self.position).normalized() * self.config.speed;
        self.transition(AgentState::Moving);
        TickOutcome::Departed(next)
    }

    // ── MOVING ────────────────────────────────────────────────────────────

    fn advance<P: RoutePlanner + ?Sized>(
        &mut self,
        planner: &P,
        target:  &TargetSnapshot,
        dt:      f32,
    ) -> TickOutcome {
        let Some(cell) = self.target else {
            self.transition(AgentState::Deciding);
            return TickOutcome::Waiting;
        };

        let dest = self.map.position(cell);
        let step = motion::step_toward(self.position, dest, self.config.speed, dt);
        self.position = step.position;
        self.velocity = step.velocity;
        if !step.arrived {
            return TickOutcome::Moving;
        }

        self.position = dest;
        self.current = cell;
        self.velocity = gw_core::Vec2::ZERO;
        self.unreachable = None;

        if self.selector.is_pursuit() && self.replan(planner, target) {
            self.transition(AgentState::Chasing);
        } else {
            self.transition(AgentState::Deciding);
        }
        TickOutcome::Arrived(cell)
    }

    /// Re-plan at a full cell arrival.  Returns `true` with a fresh route in
    /// place when the target is in vision and reachable.  On failure the
    /// current route is left untouched.
    fn replan<P: RoutePlanner + ?Sized>(&mut self, planner: &P, target: &TargetSnapshot) -> bool {
        let ctx = self.decision_context(target);
        if !ctx.target_in_vision() {
            return false;
        }
        let Goal::Pursue(goal) = self.selector.select_goal(&ctx) else {
            return false;
        };

        let route = if goal == self.current {
            Route::new()
        } else {
            planner.shortest_path(&self.map, self.current, goal)
        };
        if route.is_empty() {
            if goal != self.current {
                self.unreachable = Some(goal);
            }
            tracing::debug!(agent = %self.id, goal = %goal, kept = self.route.len(), "no route on arrival");
            return false;
        }
        tracing::debug!(agent = %self.id, goal = %goal, len = route.len(), "re-planned on arrival");
        self.route = route;
        true
    }

    fn transition(&mut self, next: AgentState) {
        if self.state != next {
            tracing::debug!(agent = %self.id, from = %self.state, to = %next, "state transition");
            self.state = next;
        }
    }
}
