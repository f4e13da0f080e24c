//! Game state and core simulation types
//!
//! All session state lives here, owned exclusively by the engine. The two
//! producers (tick timer, tilt input) never touch it directly; they go
//! through `tick::tick` and `tick::basket_input`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::PlayfieldConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Egg hit the floor; score and speed frozen until restart
    GameOver,
}

/// Outward notification emitted by the simulation
///
/// The sink reacts with audio/visuals; nothing feeds back into the
/// simulation except through `GameState::restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// An egg was intercepted by the basket
    Catch { golden: bool },
    /// Score changed (emitted after every catch)
    ScoreChanged(u32),
    /// The egg reached the floor uncaught
    Miss,
    /// Session ended; carries the final score
    GameOver { final_score: u32 },
    /// A restart reinitialized the session
    SessionReset,
}

/// The player's basket, sliding along a fixed lane near the floor
#[derive(Debug, Clone, Copy)]
pub struct Basket {
    /// Left edge, always in `[0, width - basket_width]`
    pub x: f32,
}

/// The falling egg; exactly one exists while Playing
#[derive(Debug, Clone, Copy)]
pub struct Egg {
    /// `x` is the left edge, `y` is height above the floor line
    pub pos: Vec2,
    /// Golden eggs are rare and worth 5x
    pub golden: bool,
}

impl Egg {
    /// Horizontal center, used by the catch test
    pub fn center_x(&self, egg_size: f32) -> f32 {
        self.pos.x + egg_size / 2.0
    }
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield geometry, immutable for the session
    pub config: PlayfieldConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving egg spawns
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score, monotonically non-decreasing while Playing
    pub score: u32,
    /// Fall distance per tick, monotonically non-decreasing while Playing
    pub fall_speed: f32,
    /// Player basket
    pub basket: Basket,
    /// The falling egg
    pub egg: Egg,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given geometry and seed
    ///
    /// The basket starts centered; the first egg spawns immediately.
    pub fn new(config: PlayfieldConfig, seed: u64) -> Self {
        let mut state = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            fall_speed: BASE_FALL_SPEED,
            basket: Basket {
                x: config.max_basket_x() / 2.0,
            },
            egg: Egg {
                pos: Vec2::ZERO,
                golden: false,
            },
            time_ticks: 0,
            events: Vec::new(),
        };
        state.spawn_egg();
        state
    }

    /// Spawn a fresh egg at the top of the playfield
    ///
    /// Horizontal position is uniform over the playfield; golden status is
    /// redrawn independently on every spawn.
    pub fn spawn_egg(&mut self) {
        self.egg = Egg {
            pos: Vec2::new(
                self.rng.random_range(0.0..self.config.max_egg_x()),
                self.config.egg_spawn_y(),
            ),
            golden: self.rng.random_bool(GOLDEN_EGG_CHANCE),
        };
    }

    /// Reset the session: score and speed back to base, fresh egg, Playing
    ///
    /// The basket keeps its current position across restarts.
    pub fn restart(&mut self) {
        self.score = 0;
        self.fall_speed = BASE_FALL_SPEED;
        self.phase = GamePhase::Playing;
        self.spawn_egg();
        self.push_event(GameEvent::SessionReset);
        log::info!("Session reset (seed {})", self.seed);
    }

    /// Queue an event for the sink
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
