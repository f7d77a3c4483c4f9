//! grid: headless host for the nodewalk framework.
//!
//! Builds the 15 × 15 grid, spawns agents, and steps frames the way a render
//! loop would, logging one line per movement cycle.
//!
//! Usage:
//!   cargo run -p grid --release -- [config.json] [snapshot.json]
//!
//! `config.json` may override any field of `DemoConfig`.  When
//! `snapshot.json` is given, the final node positions and agent render
//! state are written there.  Set `RUST_LOG=debug` for per-cycle detail.

mod config;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use serde_json::json;

use nw_agent::{Agent, Marker};
use nw_core::Tick;
use nw_graph::NodeGraph;
use nw_sim::{SimBuilder, SimObserver, Simulation, TickStats};

use config::DemoConfig;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Totals moves and fallbacks; logs at every snapshot.
#[derive(Default)]
struct CycleLogger {
    cycles: u64,
    moved:  usize,
    stayed: usize,
}

impl SimObserver for CycleLogger {
    fn on_tick_end(&mut self, _tick: Tick, stats: &TickStats) {
        if stats.cycle_start {
            self.cycles += 1;
            self.moved  += stats.moved;
            self.stayed += stats.stayed;
        }
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[Agent]) {
        let idle = agents.iter().filter(|a| a.is_idle()).count();
        log::info!("{tick}: {} agents, {idle} standing still", agents.len());
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        log::info!(
            "finished at {final_tick}: {} cycles, {} moves, {} fallbacks",
            self.cycles,
            self.moved,
            self.stayed
        );
    }
}

// ── Export ────────────────────────────────────────────────────────────────────

fn marker_json(marker: Option<Marker>) -> serde_json::Value {
    match marker {
        None => serde_json::Value::Null,
        Some(Marker::Circle) => json!({ "shape": "circle" }),
        Some(Marker::Triangle { heading }) => json!({ "shape": "triangle", "heading": heading }),
    }
}

fn write_snapshot(sim: &Simulation, path: &Path) -> Result<()> {
    let nodes: Vec<serde_json::Value> = sim
        .graph()
        .positions()
        .iter()
        .enumerate()
        .map(|(i, p)| json!({ "node_id": i, "x": p.x, "y": p.y }))
        .collect();

    let agents: Vec<serde_json::Value> = sim
        .snapshots()
        .into_iter()
        .map(|s| {
            let trail: Vec<[f32; 2]> = s.trail.iter().map(|p| [p.x, p.y]).collect();
            json!({
                "agent_id": s.id.0,
                "color":    s.color.to_string(),
                "position": [s.position.x, s.position.y],
                "trail":    trail,
                "marker":   marker_json(s.marker),
            })
        })
        .collect();

    let doc = json!({ "tick": sim.next_tick().0, "nodes": nodes, "agents": agents });
    fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    println!("Wrote {} ({} agents)", path.display(), agents.len());
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };
    let snapshot_path = args.next().map(PathBuf::from);

    println!("=== grid — nodewalk ===");
    println!(
        "Agents: {}  |  Period: {} ticks  |  Ticks: {}  |  Seed: {}",
        config.sim.agent_count, config.sim.movement_period, config.sim.total_ticks, config.sim.seed
    );

    // 1. Graph.
    let layout = config.grid;
    let graph = NodeGraph::build(layout.positions(), layout.edge_threshold())?;
    println!(
        "Grid: {0}×{0} nodes, spacing {1}, {2} edges",
        layout.side(),
        layout.span,
        graph.edge_count()
    );

    // 2. Simulation.
    let mut sim = SimBuilder::new(config.sim.clone(), graph)
        .palette(config.palette.clone())
        .build()?;

    // 3. Run.
    let mut obs = CycleLogger::default();
    let t0 = Instant::now();
    sim.run(&mut obs);
    println!("Simulation complete in {:.3} s", t0.elapsed().as_secs_f64());
    println!();

    // 4. Final agent table.
    println!("{:<8} {:<8} {:<8} {:<20} {:<8}", "Agent", "Node", "Target", "Position", "Colour");
    println!("{}", "-".repeat(56));
    for a in sim.agents().iter().take(12) {
        let p = a.position();
        println!(
            "{:<8} {:<8} {:<8} {:<20} {:<8}",
            a.id().0,
            a.current_node().0,
            a.target_node().0,
            format!("({:.1}, {:.1})", p.x, p.y),
            a.color(),
        );
    }
    if sim.agents().len() > 12 {
        println!("… {} more", sim.agents().len() - 12);
    }
    println!("Reservations held: {}", sim.reservations().size());

    // 5. Optional export.
    if let Some(path) = snapshot_path {
        write_snapshot(&sim, &path)?;
    }

    Ok(())
}
