//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - No timers, rendering, or platform dependencies
//!
//! The two entry points, `tick` and `basket_input`, are total functions over
//! well-formed state; malformed external input is clamped or ignored so the
//! tick loop never stalls.

pub mod catch;
pub mod input;
pub mod state;
pub mod tick;

pub use catch::egg_caught;
pub use input::{TiltFilter, sanitize_tilt};
pub use state::{Basket, Egg, GameEvent, GamePhase, GameState};
pub use tick::{basket_input, tick};
