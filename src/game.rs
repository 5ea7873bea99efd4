//! Frame driver
//!
//! Owns the [`GameState`], collects input that arrives between frames and
//! publishes one [`Snapshot`] per frame. Input can come from any thread through
//! an [`InputHandle`]; it is applied, all of it and in arrival order, at the
//! start of the next [`Game::update`].

use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::ConfigError;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameMode, GameState, InputEvent, Snapshot, tick};
use crate::valid_dt;

/// Cloneable sender for player input
#[derive(Debug, Clone)]
pub struct InputHandle {
    tx: Sender<InputEvent>,
}

impl InputHandle {
    pub fn tap(&self) {
        self.send(InputEvent::Tap);
    }

    pub fn pause_toggle(&self, paused: bool) {
        self.send(InputEvent::PauseToggle(paused));
    }

    fn send(&self, input: InputEvent) {
        // Receiver only goes away with the game itself
        let _ = self.tx.send(input);
    }
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    inputs: Receiver<InputEvent>,
    handle: InputHandle,
    snapshot: Snapshot,
    max_frame_dt: f32,
}

impl Game {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let state = GameState::new(&settings);
        let (tx, inputs) = mpsc::channel();
        log::info!(
            "Game ready: {}x{} on {}, gap range [{}, {}], seed {}",
            settings.screen_width,
            settings.screen_height,
            settings.platform.as_str(),
            state.bounds.min_interval,
            state.bounds.max_interval,
            settings.seed
        );
        Ok(Self {
            snapshot: Snapshot::capture(&state),
            state,
            inputs,
            handle: InputHandle { tx },
            max_frame_dt: settings.max_frame_dt,
        })
    }

    /// Handle for delivering input from elsewhere (UI thread, event loop)
    pub fn input_handle(&self) -> InputHandle {
        self.handle.clone()
    }

    pub fn on_tap(&self) {
        self.handle.tap();
    }

    pub fn on_pause_toggle(&self, paused: bool) {
        self.handle.pause_toggle(paused);
    }

    /// Run one frame. `dt` is seconds since the previous frame, `None` when
    /// unknown (first frame, dropped frame).
    pub fn update(&mut self, dt: Option<f32>) -> Vec<GameEvent> {
        let inputs: Vec<InputEvent> = self.inputs.try_iter().collect();
        let dt = valid_dt(dt).map(|dt| dt.min(self.max_frame_dt));
        let events = tick(&mut self.state, &inputs, dt);
        self.snapshot = Snapshot::capture(&self.state);
        events
    }

    /// Snapshot published by the last update
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn score(&self) -> u32 {
        self.state.score.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    const DT: Option<f32> = Some(1.0 / 60.0);

    fn game() -> Game {
        Game::new(Settings::default()).unwrap()
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings {
            gravity: 0.0,
            ..Settings::default()
        };
        assert!(matches!(
            Game::new(settings),
            Err(ConfigError::InvalidGravity(_))
        ));
    }

    #[test]
    fn test_input_waits_for_next_update() {
        let mut game = game();
        game.on_tap();
        assert_eq!(game.mode(), GameMode::Ready);
        assert_eq!(game.snapshot().mode, GameMode::Ready);
        let events = game.update(DT);
        assert_eq!(events[0], GameEvent::Started { run: 1 });
        assert_eq!(game.snapshot().mode, GameMode::Playing);
    }

    #[test]
    fn test_restart_yields_clean_run() {
        let mut game = game();
        game.on_tap();
        for _ in 0..600 {
            game.update(DT);
            if game.mode() == GameMode::GameOver {
                break;
            }
        }
        assert_eq!(game.mode(), GameMode::GameOver);

        game.on_pause_toggle(false);
        game.update(None);
        let snap = game.snapshot();
        let bounds = game.state().bounds;
        assert_eq!(snap.mode, GameMode::Playing);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.body_y, bounds.body_start_y);
        assert_eq!(snap.body_velocity, 0.0);
        assert_eq!(snap.obstacle_x, bounds.screen_width);
        assert_eq!(snap.gap_offset, 0.0);
        assert!(!snap.click_disabled);
    }

    #[test]
    fn test_pause_resume_round_trip() {
        let mut game = game();
        game.on_tap();
        for i in 0..45 {
            if i % 20 == 0 {
                game.on_tap();
            }
            game.update(DT);
        }
        assert_eq!(game.mode(), GameMode::Playing);
        game.on_pause_toggle(true);
        game.update(DT);
        let paused = game.snapshot();
        assert_eq!(paused.mode, GameMode::Paused);

        for _ in 0..120 {
            game.update(DT);
        }
        game.on_pause_toggle(false);
        game.update(None);
        let resumed = game.snapshot();
        assert_eq!(resumed.mode, GameMode::Playing);
        assert!((resumed.body_y - paused.body_y).abs() < 1e-4);
        assert!((resumed.body_velocity - paused.body_velocity).abs() < 1e-4);
        assert!((resumed.obstacle_x - paused.obstacle_x).abs() < 1e-4);
        assert_eq!(resumed.gap_offset, paused.gap_offset);
        assert_eq!(resumed.score, paused.score);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut game = game();
        game.on_tap();
        game.update(None);
        let y = game.snapshot().body_y;
        game.update(Some(10.0));
        let snap = game.snapshot();
        // One clamped step from rest: velocity = g * max_dt, position unchanged
        assert!((snap.body_velocity - GRAVITY * MAX_FRAME_DT).abs() < 1e-3);
        assert_eq!(snap.body_y, y);
    }

    #[test]
    fn test_input_from_another_thread() {
        let mut game = game();
        let handle = game.input_handle();
        std::thread::spawn(move || {
            handle.tap();
            handle.tap();
        })
        .join()
        .unwrap();
        let events = game.update(None);
        assert_eq!(events, vec![GameEvent::Started { run: 1 }, GameEvent::Jumped]);
        assert_eq!(game.snapshot().body_velocity, JUMP_FORCE);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn play_never_leaves_invariants(
                seed in any::<u64>(),
                taps in proptest::collection::vec(any::<bool>(), 1..400),
            ) {
                let mut game = Game::new(Settings { seed, ..Settings::default() }).unwrap();
                let bounds = game.state().bounds;
                let mut last_score = 0;
                for tap in taps {
                    if tap {
                        game.on_tap();
                    }
                    let events = game.update(DT);
                    let snap = game.snapshot();
                    prop_assert!(snap.gap_offset >= bounds.min_interval);
                    prop_assert!(snap.gap_offset <= bounds.max_interval);
                    let started = events.iter().any(|e| matches!(e, GameEvent::Started { .. }));
                    if !started {
                        prop_assert!(snap.score == last_score || snap.score == last_score + 1);
                    }
                    if snap.mode == GameMode::GameOver {
                        prop_assert!(!game.state().track.is_running());
                    }
                    last_score = snap.score;
                }
            }
        }
    }
}
