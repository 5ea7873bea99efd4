//! Flappy Sim headless runner
//!
//! Plays the simulation with a simple autopilot and prints one JSON snapshot
//! per frame, for replay tooling and eyeballing tuning changes.
//!
//! Usage: `flappy-sim [settings.json] [seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_sim::consts::{ANCHOR_Y, HALF_GAP, OBSTACLE_HEIGHT};
    use flappy_sim::sim::{GameEvent, GameMode, Snapshot};
    use flappy_sim::{Game, Settings};

    /// Tap when the body sinks below the middle of the gap
    fn wants_tap(snap: &Snapshot) -> bool {
        let gap_center = snap.top_y + OBSTACLE_HEIGHT + HALF_GAP;
        snap.body_velocity >= 0.0 && snap.body_y + ANCHOR_Y > gap_center + 20.0
    }

    env_logger::init();
    log::info!("Flappy Sim (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);

    let mut game = match Game::new(settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };

    const FRAME_DT: f32 = 1.0 / 60.0;
    let frames = (seconds / FRAME_DT).round() as u64;
    let mut best = 0;

    game.on_tap();
    for _ in 0..frames {
        let snap = game.snapshot();
        match snap.mode {
            GameMode::Playing if wants_tap(&snap) => game.on_tap(),
            GameMode::GameOver => game.on_pause_toggle(false),
            _ => {}
        }

        for event in game.update(Some(FRAME_DT)) {
            if let GameEvent::GameOver { score } = event {
                best = best.max(score);
            }
        }

        match serde_json::to_string(&game.snapshot()) {
            Ok(line) => println!("{}", line),
            Err(e) => log::warn!("Snapshot encode failed: {}", e),
        }
    }

    best = best.max(game.score());
    log::info!("Done after {} frames, best score {}", frames, best);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web; embed the library instead
}
