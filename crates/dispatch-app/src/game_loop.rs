//! Game loop thread — runs the engine at 30 Hz and hands snapshots to the
//! console renderer.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in shared state for synchronous polling by the REPL.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use dispatch_core::commands::OperatorCommand;
use dispatch_core::constants::TICK_RATE;
use dispatch_core::state::BoardSnapshot;
use dispatch_sim::engine::{DispatchEngine, EngineConfig};

use crate::announcer::{render_snapshot, Announcer};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the REPL to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// An operator command to forward to the engine.
    Operator(OperatorCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the REPL to use.
pub fn spawn_game_loop(
    announcer: Arc<dyn Announcer + Send + Sync>,
    latest_snapshot: Arc<Mutex<Option<BoardSnapshot>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("dispatch-game-loop".into())
        .spawn(move || {
            run_game_loop(announcer.as_ref(), cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    announcer: &(dyn Announcer + Send + Sync),
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<BoardSnapshot>>,
) {
    let mut engine = DispatchEngine::new(EngineConfig {
        seed: wall_clock_seed(),
        ..Default::default()
    });
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Operator(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Render events and alerts for this tick
        render_snapshot(&snapshot, announcer);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Seed for interactive sessions; each run draws a different call sequence.
fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(42)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Operator(OperatorCommand::StartCall))
            .unwrap();
        tx.send(LoopCommand::Operator(OperatorCommand::Dispatch))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Operator(OperatorCommand::StartCall)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Operator(OperatorCommand::Dispatch)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
