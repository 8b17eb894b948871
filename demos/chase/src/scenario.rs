//! Scenario description: map, agents, and the scripted target path.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use gw_agent::AgentConfig;
use gw_behavior::{BehaviorKind, TargetSnapshot};
use gw_core::{Frame, GridCoord, SimConfig, Vec2};
use gw_grid::{GridMap, GridMapBuilder};
use gw_sim::TargetDriver;

const DEFAULT_MAP: &[&str] = &[
    "################",
    "#..............#",
    "#..####....##..#",
    "#.....#........#",
    "#.....#..###...#",
    "#..............#",
    "#...##......#..#",
    "#...#.......#..#",
    "#..............#",
    "################",
];

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub sim:          SimConfig,
    /// One string per row, `.` walkable and `#` blocked.
    pub map:          Vec<String>,
    pub cell_size:    f32,
    /// Waypoints the target patrols in a loop.
    pub target_path:  Vec<Vec2>,
    /// Target speed in world units per second.
    pub target_speed: f32,
    pub agents:       Vec<AgentSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSpec {
    #[serde(default)]
    pub config: AgentConfig,
    #[serde(default)]
    pub spawn:  Option<GridCoord>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            sim: SimConfig {
                frame_secs:             0.05,
                total_frames:           600,
                seed:                   42,
                num_threads:            None,
                output_interval_frames: 5,
            },
            map:          DEFAULT_MAP.iter().map(|r| (*r).to_owned()).collect(),
            cell_size:    1.0,
            target_path:  vec![
                Vec2::new(1.0, 1.0),
                Vec2::new(14.0, 1.0),
                Vec2::new(14.0, 8.0),
                Vec2::new(1.0, 8.0),
            ],
            target_speed: 1.2,
            agents:       vec![
                AgentSpec { config: AgentConfig::new(BehaviorKind::Wander), spawn: None },
                AgentSpec { config: AgentConfig::new(BehaviorKind::Wander), spawn: None },
                AgentSpec {
                    config: AgentConfig::new(BehaviorKind::ChaseDirect).with_vision(6.0),
                    spawn:  Some(GridCoord::new(8, 5)),
                },
                AgentSpec {
                    config: AgentConfig::new(BehaviorKind::ChaseOffset),
                    spawn:  Some(GridCoord::new(3, 8)),
                },
            ],
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))?;
        Ok(scenario)
    }

    pub fn build_map(&self) -> Result<GridMap> {
        let map = GridMapBuilder::from_ascii(&self.map.join("\n"))?
            .cell_size(self.cell_size)
            .build()?;
        if map.walkable_count() == 0 {
            bail!("scenario map has no walkable cells");
        }
        Ok(map)
    }

    pub fn initial_target(&self) -> TargetSnapshot {
        TargetSnapshot::at(self.target_path.first().copied().unwrap_or(Vec2::ZERO))
    }

    /// A driver moving the target around `target_path` at `target_speed`.
    pub fn target_patrol(&self) -> Patrol {
        Patrol {
            waypoints: self.target_path.clone(),
            speed:     self.target_speed,
            next:      1,
        }
    }
}

/// Loops the target through a list of waypoints.
pub struct Patrol {
    waypoints: Vec<Vec2>,
    speed:     f32,
    next:      usize,
}

impl TargetDriver for Patrol {
    fn update(&mut self, _frame: Frame, dt: f32, target: &mut TargetSnapshot) {
        if self.waypoints.len() < 2 {
            return;
        }
        let goal = self.waypoints[self.next % self.waypoints.len()];
        let delta = goal - target.position;
        let step = self.speed * dt;
        if delta.length() <= step {
            target.position = goal;
            self.next = (self.next + 1) % self.waypoints.len();
        } else {
            target.position = target.position + delta.normalized() * step;
        }
    }
}
