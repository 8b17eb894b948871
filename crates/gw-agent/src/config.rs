//! Per-agent configuration.

use gw_behavior::{BehaviorKind, DEFAULT_CHASE_OFFSET};

use crate::{AgentError, AgentResult};

/// Static configuration for one agent.  Validated once at construction and
/// never changed afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// World units per second.  Must be finite and > 0.
    pub speed:         f32,

    /// Distance at which chase strategies see the target.  Must be ≥ 0;
    /// `f32::INFINITY` means always visible.
    pub vision_radius: f32,

    /// Random-walk step bound.  `None` uses the behavior's default
    /// (see [`BehaviorKind::default_walk_steps`]).
    pub walk_steps:    Option<usize>,

    pub behavior:      BehaviorKind,

    /// Lateral +x offset used by [`BehaviorKind::ChaseOffset`].
    pub chase_offset:  f32,
}

impl AgentConfig {
    /// Defaults for `behavior`: speed 1, vision 5, default walk bound,
    /// offset 2.
    pub fn new(behavior: BehaviorKind) -> Self {
        Self {
            speed:         1.0,
            vision_radius: 5.0,
            walk_steps:    None,
            behavior,
            chase_offset:  DEFAULT_CHASE_OFFSET,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_vision(mut self, vision_radius: f32) -> Self {
        self.vision_radius = vision_radius;
        self
    }

    pub fn with_walk_steps(mut self, steps: usize) -> Self {
        self.walk_steps = Some(steps);
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.chase_offset = offset;
        self
    }

    /// Effective random-walk bound.
    #[inline]
    pub fn walk_steps(&self) -> usize {
        self.walk_steps.unwrap_or_else(|| self.behavior.default_walk_steps())
    }

    pub fn validate(&self) -> AgentResult<()> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(AgentError::Config(format!(
                "speed must be finite and > 0, got {}",
                self.speed
            )));
        }
        if self.vision_radius.is_nan() || self.vision_radius < 0.0 {
            return Err(AgentError::Config(format!(
                "vision radius must be >= 0, got {}",
                self.vision_radius
            )));
        }
        if self.walk_steps == Some(0) {
            return Err(AgentError::Config("walk step bound must be > 0".into()));
        }
        if !self.chase_offset.is_finite() {
            return Err(AgentError::Config(format!(
                "chase offset must be finite, got {}",
                self.chase_offset
            )));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(BehaviorKind::default())
    }
}
