//! Egg Drop - a tilt-controlled egg-catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fall physics, catch geometry, game state)
//! - `runtime`: Engine actor serializing ticks and tilt input onto one thread
//! - `audio`: Event reactor that maps game events to sound cues
//! - `config`: Playfield geometry, supplied once at construction

pub mod audio;
pub mod config;
pub mod runtime;
pub mod sim;

pub use config::PlayfieldConfig;
pub use runtime::{ChannelSink, Engine, EventSink};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation tick interval (wall-clock timer, not frame-locked)
    pub const TICK_INTERVAL: Duration = Duration::from_millis(30);
    /// Nominal tilt sensor sampling interval (irregular intervals tolerated)
    pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(20);

    /// Playfield defaults
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;

    /// Basket dimensions - the basket slides along a fixed lane near the floor
    pub const BASKET_WIDTH: f32 = 90.0;
    pub const BASKET_HEIGHT: f32 = 50.0;
    /// Gap between the floor line and the basket's bottom edge
    pub const BASKET_FLOOR_OFFSET: f32 = 20.0;

    /// Egg dimensions
    pub const EGG_SIZE: f32 = 40.0;
    /// Eggs spawn this far below the playfield's top edge
    pub const EGG_SPAWN_MARGIN: f32 = 80.0;

    /// Fall speed at session start (units per tick)
    pub const BASE_FALL_SPEED: f32 = 4.0;
    /// Flat speed increase applied on every catch
    pub const FALL_SPEED_INCREMENT: f32 = 0.3;

    /// Score for a regular catch
    pub const EGG_SCORE: u32 = 1;
    /// Score for a golden catch
    pub const GOLDEN_EGG_SCORE: u32 = 5;
    /// Chance that a freshly spawned egg is golden
    pub const GOLDEN_EGG_CHANCE: f64 = 0.15;

    /// Horizontal displacement per unit of tilt (integrating control)
    pub const TILT_GAIN: f32 = 30.0;
    /// Tilt samples beyond this magnitude are sensor garbage and get clamped
    pub const MAX_TILT: f32 = 4.0;
}
