//! Engine runtime
//!
//! The two event sources - a fixed-rate tick timer (~30 ms) and the tilt
//! sample stream (~20 ms) - are logically concurrent but must never
//! interleave destructively. Both are serialized onto a single command
//! queue consumed by one worker thread that owns the `GameState`, so there
//! is nothing to race on. Input may observe a basket position one tick
//! stale; last write wins.
//!
//! Event delivery to the sink is fire-and-forget: a slow or dead sink must
//! never stall the tick cadence.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::config::PlayfieldConfig;
use crate::consts::TICK_INTERVAL;
use crate::sim::{GameEvent, GameState, basket_input, tick};

/// Receives the ordered event stream from the engine
///
/// `deliver` runs on the simulation thread and must not block; sink
/// failures are the sink's problem and stay there.
pub trait EventSink: Send {
    fn deliver(&mut self, event: GameEvent);
}

/// Sink forwarding events over an unbounded channel
///
/// Sends never block, and a dropped receiver is silently ignored - the
/// simulation keeps running with nobody listening.
pub struct ChannelSink {
    tx: Sender<GameEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, Receiver<GameEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn deliver(&mut self, event: GameEvent) {
        let _ = self.tx.send(event);
    }
}

enum Command {
    Tilt(f32),
    Restart,
    Shutdown,
}

/// Handle to a running simulation worker
///
/// Dropping the handle shuts the worker down and joins it, so the timer
/// and queue are torn down wholly with the session.
pub struct Engine {
    commands: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl Engine {
    /// Spawn the simulation worker for a new session
    pub fn spawn(config: PlayfieldConfig, seed: u64, sink: impl EventSink + 'static) -> Self {
        let (commands, queue) = mpsc::channel();
        let worker = thread::spawn(move || run(config, seed, queue, sink));
        log::info!("Engine started (seed {seed})");
        Self {
            commands,
            worker: Some(worker),
        }
    }

    /// Forward one tilt sample (callable from any thread, non-blocking)
    pub fn tilt(&self, sample: f32) {
        let _ = self.commands.send(Command::Tilt(sample));
    }

    /// Reset the session
    pub fn restart(&self) {
        let _ = self.commands.send(Command::Restart);
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Worker loop: waits for commands until the next tick deadline
///
/// The deadline advances by the fixed interval rather than being derived
/// from "now", so queue jitter does not accumulate drift. A stall longer
/// than one interval re-anchors the deadline instead of bursting catch-up
/// ticks.
fn run(
    config: PlayfieldConfig,
    seed: u64,
    queue: Receiver<Command>,
    mut sink: impl EventSink,
) {
    let mut state = GameState::new(config, seed);
    let mut deadline = Instant::now() + TICK_INTERVAL;

    loop {
        let now = Instant::now();
        if now >= deadline {
            tick(&mut state);
            flush(&mut state, &mut sink);
            deadline += TICK_INTERVAL;
            if deadline <= now {
                deadline = now + TICK_INTERVAL;
            }
            continue;
        }

        match queue.recv_timeout(deadline - now) {
            Ok(Command::Tilt(sample)) => basket_input(&mut state, sample),
            Ok(Command::Restart) => {
                state.restart();
                flush(&mut state, &mut sink);
            }
            Ok(Command::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
    log::debug!("Engine worker stopped");
}

fn flush(state: &mut GameState, sink: &mut impl EventSink) {
    for event in state.drain_events() {
        sink.deliver(event);
    }
}
