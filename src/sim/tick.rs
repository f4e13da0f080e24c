//! Fixed-tick simulation update
//!
//! Two entry points mutate session state:
//! - `tick`: advances the fall and resolves miss/catch, driven by a fixed
//!   wall-clock timer (~30 ms nominal)
//! - `basket_input`: integrates a tilt sample into basket position, driven
//!   by the sensor stream (~20 ms nominal, irregular intervals tolerated)
//!
//! Both are cheap and never block; event delivery is the runtime's job.

use super::catch::egg_caught;
use super::input::sanitize_tilt;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the simulation by one tick
///
/// No-op in GameOver. Within a tick the fall advances first; boundary exit
/// is detected as part of the advance itself, so a tick that crosses the
/// floor resolves to Miss before the catch test ever runs. The catch test
/// only sees post-advance, in-bounds positions.
pub fn tick(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time_ticks += 1;

    let new_y = state.egg.pos.y - state.fall_speed;
    if new_y < 0.0 {
        // Egg reached the floor uncaught. The crossing position is never
        // stored; the session freezes on the last in-bounds state.
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::Miss);
        state.push_event(GameEvent::GameOver {
            final_score: state.score,
        });
        log::info!(
            "Game over at tick {} with score {}",
            state.time_ticks,
            state.score
        );
        return;
    }
    state.egg.pos.y = new_y;

    if egg_caught(state.egg.pos, state.basket.x, &state.config) {
        let golden = state.egg.golden;
        state.score += if golden { GOLDEN_EGG_SCORE } else { EGG_SCORE };
        state.fall_speed += FALL_SPEED_INCREMENT;
        state.push_event(GameEvent::Catch { golden });
        state.push_event(GameEvent::ScoreChanged(state.score));
        state.spawn_egg();
        log::debug!(
            "Catch (golden: {golden}) -> score {}, fall speed {:.1}",
            state.score,
            state.fall_speed
        );
    }
}

/// Integrate one tilt sample into the basket position
///
/// Relative control: each sample displaces the basket by `tilt * TILT_GAIN`,
/// clamped to the playfield. Non-finite samples are dropped. Deliberately
/// not gated on phase - the basket stays controllable after game over.
pub fn basket_input(state: &mut GameState, tilt: f32) {
    let Some(tilt) = sanitize_tilt(tilt) else {
        return;
    };
    state.basket.x = (state.basket.x - tilt * TILT_GAIN).clamp(0.0, state.config.max_basket_x());
}
