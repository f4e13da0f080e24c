//! Sound cue reactor
//!
//! The simulation emits pure events; this reactor owns the audio side
//! effects. Playback failures are swallowed and logged - a broken speaker
//! must never reach back into the tick loop.

use std::io;

use crate::runtime::EventSink;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Egg landed in the basket
    Catch,
    /// Golden egg landed in the basket
    GoldenCatch,
    /// Egg hit the floor
    Miss,
}

/// Backend that actually makes noise
pub trait SoundPlayer: Send {
    fn play(&mut self, cue: SoundCue, volume: f32) -> io::Result<()>;
}

/// Maps game events to sound cues and plays them through a backend
pub struct AudioReactor {
    player: Option<Box<dyn SoundPlayer>>,
    master_volume: f32,
    muted: bool,
}

impl AudioReactor {
    pub fn new(player: Box<dyn SoundPlayer>) -> Self {
        Self {
            player: Some(player),
            master_volume: 0.8,
            muted: false,
        }
    }

    /// Reactor with no backend; cues are dropped
    pub fn disabled() -> Self {
        log::warn!("No sound backend - audio disabled");
        Self {
            player: None,
            master_volume: 0.8,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all cues
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Which cue, if any, an event triggers
    fn cue_for(event: GameEvent) -> Option<SoundCue> {
        match event {
            GameEvent::Catch { golden: false } => Some(SoundCue::Catch),
            GameEvent::Catch { golden: true } => Some(SoundCue::GoldenCatch),
            GameEvent::Miss => Some(SoundCue::Miss),
            GameEvent::ScoreChanged(_) | GameEvent::GameOver { .. } | GameEvent::SessionReset => {
                None
            }
        }
    }

    /// React to one game event, swallowing playback failures
    pub fn react(&mut self, event: GameEvent) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(player) = &mut self.player else {
            return;
        };
        if let Some(cue) = Self::cue_for(event) {
            if let Err(e) = player.play(cue, vol) {
                log::debug!("Sound playback failed for {cue:?}: {e}");
            }
        }
    }
}

impl EventSink for AudioReactor {
    fn deliver(&mut self, event: GameEvent) {
        self.react(event);
    }
}
