//! chase: headless run of wandering and chasing NPCs on a small grid.
//!
//! Usage: `chase [scenario.json] [output-dir]`
//!
//! Without a scenario file a built-in 16×10 room with two wanderers, a
//! direct chaser and an offset chaser is used.  The target patrols a loop of
//! waypoints.  Set `RUST_LOG=debug` to see every state transition.

mod scenario;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use gw_agent::Agent;
use gw_core::Frame;
use gw_grid::GridPlanner;
use gw_output::{CsvWriter, OutputWriter, SimOutputObserver};
use gw_sim::{SimBuilder, SimObserver};

use scenario::Scenario;

const DEFAULT_OUTPUT_DIR: &str = "output/chase";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    peak_moving:   usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, peak_moving: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, moving: usize) {
        self.summary_rows += 1;
        self.peak_moving = self.peak_moving.max(moving);
        self.inner.on_frame_end(frame, moving);
    }

    fn on_snapshot(&mut self, frame: Frame, agents: &[Agent]) {
        self.snapshot_rows += agents.len();
        self.inner.on_snapshot(frame, agents);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let scenario = match args.next() {
        Some(path) => Scenario::load(Path::new(&path))?,
        None => Scenario::default(),
    };
    let out_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    #[cfg(feature = "parallel")]
    {
        if let Some(n) = scenario.sim.num_threads {
            rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
        }
    }

    // 1. Map.
    let map = Arc::new(scenario.build_map()?);
    println!("=== chase — gridwalk NPC demo ===");
    println!(
        "Map: {}×{} ({} walkable)  |  Agents: {}  |  Frames: {}  |  Seed: {}",
        map.width(),
        map.height(),
        map.walkable_count(),
        scenario.agents.len(),
        scenario.sim.total_frames,
        scenario.sim.seed,
    );
    println!();

    // 2. Sim.
    let mut builder = SimBuilder::new(
        scenario.sim.clone(),
        Arc::clone(&map),
        GridPlanner::new(),
        scenario.initial_target(),
    )
    .target_driver(scenario.target_patrol());
    for spec in &scenario.agents {
        builder = match spec.spawn {
            Some(coord) => builder.agent_at(spec.config, coord),
            None => builder.agent(spec.config),
        };
    }
    let mut sim = builder.build()?;

    // 3. Output.
    std::fs::create_dir_all(&out_dir)?;
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &scenario.sim));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  frame_summaries.csv : {} rows", obs.summary_rows);
    println!("  peak moving agents  : {}", obs.peak_moving);
    println!("  target at           : {}", sim.target().position);
    println!();

    println!("{:<6} {:<13} {:<9} {:<8} {:<18}", "Agent", "Behavior", "State", "Cell", "Position");
    println!("{}", "-".repeat(56));
    for agent in sim.agents() {
        let cell = map.coord_of(agent.current_cell());
        println!(
            "{:<6} {:<13} {:<9} {:<8} {:<18}",
            agent.id().0,
            agent.behavior().as_str(),
            agent.state().as_str(),
            format!("{},{}", cell.x, cell.y),
            agent.position().to_string(),
        );
    }

    Ok(())
}
