//! Egg Drop entry point
//!
//! Headless demo driver: a synthetic tilt sampler stands in for the
//! accelerometer, events print to stdout, and catches ring the terminal
//! bell. Run with `RUST_LOG=debug` for tick-level detail.

use std::io::{self, Write};
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use egg_drop::audio::{AudioReactor, SoundCue, SoundPlayer};
use egg_drop::consts::SAMPLE_INTERVAL;
use egg_drop::sim::{GameEvent, TiltFilter};
use egg_drop::{ChannelSink, Engine, PlayfieldConfig};

/// Number of demo sessions before exiting
const DEMO_SESSIONS: u32 = 3;

/// Terminal-bell sound backend
struct ConsoleBeep;

impl SoundPlayer for ConsoleBeep {
    fn play(&mut self, cue: SoundCue, _volume: f32) -> io::Result<()> {
        let mut out = io::stdout();
        match cue {
            SoundCue::Catch | SoundCue::Miss => out.write_all(b"\x07")?,
            SoundCue::GoldenCatch => out.write_all(b"\x07\x07")?,
        }
        out.flush()
    }
}

fn main() {
    env_logger::init();

    let config = PlayfieldConfig::load("playfield.json");
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    log::info!("Egg Drop starting with seed {seed}");

    let (sink, events) = ChannelSink::new();
    let engine = Engine::spawn(config, seed, sink);
    let mut reactor = AudioReactor::new(Box::new(ConsoleBeep));
    let mut filter = TiltFilter::default();

    println!("Tilt demo: basket sweeps the playfield, catches ring the bell");

    let start = Instant::now();
    let mut sessions = 0;
    loop {
        thread::sleep(SAMPLE_INTERVAL);

        // Synthetic sensor: a lazy side-to-side sweep
        let t = start.elapsed().as_secs_f32();
        let raw = (t * 0.8).sin() * 0.6;
        engine.tilt(filter.apply(raw));

        for event in events.try_iter() {
            reactor.react(event);
            match event {
                GameEvent::Catch { golden: true } => println!("Golden catch!"),
                GameEvent::Catch { golden: false } => {}
                GameEvent::ScoreChanged(score) => println!("Score: {score}"),
                GameEvent::Miss => println!("Splat."),
                GameEvent::GameOver { final_score } => {
                    println!("Game over - final score {final_score}");
                    sessions += 1;
                    if sessions >= DEMO_SESSIONS {
                        // Dropping the engine joins the worker
                        return;
                    }
                    engine.restart();
                }
                GameEvent::SessionReset => println!("New session"),
            }
        }
    }
}
