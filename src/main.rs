use anyhow::{Context, Result};
use glam::IVec2;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
};

use blokgrid::{
    engine::Engine,
    player::{EdgeTrigger, InputSnapshot, MiningOutcome, SlotKeys, INVENTORY_SLOTS},
    world::{BlockType, SharedWorld},
    EngineConfig,
};

const DEFAULT_CONFIG: &str = "blokgrid.toml";
const MAX_MINING_STEPS: usize = 1000;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = EngineConfig::load_or_create(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    let mut engine = Engine::new(config).context("Failed to start engine")?;
    {
        let world = engine.world();
        info!("World ready: {} chunks, seed {}", world.chunk_count(), world.seed());
    }

    let running = Arc::new(AtomicBool::new(true));
    let reader = spawn_reader(engine.shared_world(), running.clone());

    run_session(&mut engine);

    running.store(false, Ordering::Release);
    match reader.join() {
        Ok(passes) => info!("Reader thread finished after {} passes", passes),
        Err(_) => warn!("Reader thread panicked"),
    }

    let player = engine.player();
    info!(
        "Finished after {} steps at ({:.1}, {:.1})",
        engine.tick(),
        player.position().x,
        player.position().y
    );
    for (index, slot) in player.inventory.slots().iter().enumerate() {
        if !slot.is_empty() {
            info!("  slot {}: {} x{}", index, slot.kind.name(), slot.count);
        }
    }
    Ok(())
}

/// Counts leaves under a read guard until told to stop, the way a renderer
/// on another thread would walk the grid.
fn spawn_reader(world: SharedWorld, running: Arc<AtomicBool>) -> thread::JoinHandle<usize> {
    thread::spawn(move || {
        let mut passes = 0;
        while running.load(Ordering::Acquire) {
            let guard = world.read();
            let bounds = guard.bounds();
            let leaves: usize = bounds
                .iter()
                .filter_map(|coord| guard.chunk(coord))
                .map(|chunk| chunk.count(BlockType::Leaves))
                .sum();
            drop(guard);
            if passes == 0 {
                info!("Reader sees {} leaf blocks", leaves);
            }
            passes += 1;
            thread::yield_now();
        }
        passes
    })
}

fn run_session(engine: &mut Engine) {
    let block_size = engine.config().gameplay.block_size;

    for _ in 0..30 {
        engine.step(&InputSnapshot::idle(), IVec2::ZERO);
    }
    info!("Settled, on ground: {}", engine.player().on_ground());

    let walk = InputSnapshot {
        move_right: true,
        ..InputSnapshot::idle()
    };
    for _ in 0..60 {
        let report = engine.step(&walk, IVec2::ZERO);
        if report.collision.blocked_x {
            let jump = InputSnapshot {
                jump: true,
                ..walk
            };
            engine.step(&jump, IVec2::ZERO);
        }
    }
    let cell = engine.player().block_cell(block_size);
    info!("Walked to cell {}", cell);

    let column = cell.x + 2;
    let Some(surface) = engine.world().surface_y(column) else {
        warn!("Column {} has no solid cell to mine", column);
        return;
    };
    let target = IVec2::new(column, surface);

    let mine = InputSnapshot {
        mine_held: true,
        ..InputSnapshot::idle()
    };
    let mut broken = None;
    for _ in 0..MAX_MINING_STEPS {
        match engine.step(&mine, target).mining {
            Ok(MiningOutcome::Broken { kind, grant, .. }) => {
                broken = Some((kind, grant));
                break;
            }
            Ok(MiningOutcome::Idle) => {
                warn!("Mining at {} stopped before the block broke", target);
                break;
            }
            Ok(MiningOutcome::Progress { .. }) => {}
            Err(e) => {
                warn!("Mining at {} failed: {}", target, e);
                break;
            }
        }
    }
    match broken {
        Some((kind, Ok(slot))) => info!("Mined {} at {} into slot {}", kind.name(), target, slot),
        Some((kind, Err(e))) => info!("Mined {} at {} but {}", kind.name(), target, e),
        None => return,
    }

    // Number key 3 and the place button, pressed on this step
    let mut slot_keys = SlotKeys::new();
    let mut place_button = EdgeTrigger::default();
    let mut number_keys = [false; INVENTORY_SLOTS];
    number_keys[2] = true;
    let place = InputSnapshot {
        place_pressed: place_button.update(true),
        selected_slot: slot_keys.update(number_keys),
        ..InputSnapshot::idle()
    };
    match engine.step(&place, target).placement {
        Some(Ok(placement)) => info!(
            "Placed {} at {}, {} left",
            placement.kind.name(),
            placement.cell,
            placement.remaining
        ),
        Some(Err(e)) => warn!("Placement at {} failed: {}", target, e),
        None => {}
    }
}
