//! Dispatch engine — the core of the simulation.
//!
//! `DispatchEngine` owns the hecs ECS world of responder units, processes
//! operator commands, runs the movement system, and produces
//! `BoardSnapshot`s. Completely headless (no rendering or audio
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dispatch_core::commands::OperatorCommand;
use dispatch_core::enums::{AlertLevel, CallPhase, UnitStatus};
use dispatch_core::error::Refusal;
use dispatch_core::events::{Alert, ConsoleEvent};
use dispatch_core::scenario::{default_catalog, Scenario};
use dispatch_core::state::BoardSnapshot;
use dispatch_core::types::SimTime;

use crate::controller::CallController;
use crate::roster;
use crate::systems;

/// Configuration for starting a new simulation.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed + same commands = same simulation.
    pub seed: u64,
    /// Scenario catalog to draw calls from. An empty catalog falls back to
    /// the built-in one.
    pub catalog: Vec<Scenario>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            catalog: default_catalog(),
        }
    }
}

/// The simulation engine. Owns the unit world and all workflow state.
pub struct DispatchEngine {
    world: World,
    time: SimTime,
    controller: CallController,
    catalog: Vec<Scenario>,
    rng: ChaCha8Rng,
    command_queue: VecDeque<OperatorCommand>,
    events: Vec<ConsoleEvent>,
    alerts: Vec<Alert>,
}

impl DispatchEngine {
    /// Create a new engine with the given config. The standing unit roster
    /// is spawned immediately.
    pub fn new(config: EngineConfig) -> Self {
        let mut world = World::new();
        roster::spawn_units(&mut world);

        let catalog = if config.catalog.is_empty() {
            default_catalog()
        } else {
            config.catalog
        };

        Self {
            world,
            time: SimTime::default(),
            controller: CallController::new(),
            catalog,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> BoardSnapshot {
        self.process_commands();
        self.controller
            .deliver_pending_intro(self.time.tick, &mut self.events);
        systems::movement::run(&mut self.world, &mut self.events);
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        let alerts = std::mem::take(&mut self.alerts);
        systems::snapshot::build(&self.world, &self.controller, &self.time, events, alerts)
    }

    /// Get the current workflow controller (read-only).
    pub fn controller(&self) -> &CallController {
        &self.controller
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command. Refusals never mutate state; they
    /// surface as console events or alerts.
    fn handle_command(&mut self, command: OperatorCommand) {
        let result = match command {
            OperatorCommand::StartCall => {
                self.start_call();
                Ok(())
            }
            OperatorCommand::VerifyAddress { input } => self
                .controller
                .verify_address(&input, &mut self.events),
            OperatorCommand::RequestDetails => {
                self.controller.request_details(&mut self.events)
            }
            OperatorCommand::ToggleUnit { call_sign } => self.toggle_unit(&call_sign),
            OperatorCommand::Dispatch => self.dispatch(),
            OperatorCommand::RecallUnit { call_sign } => self.recall_unit(&call_sign),
        };

        if let Err(refusal) = result {
            log::debug!("operator command refused: {refusal}");
            match refusal {
                // Verification failure has its own console event.
                Refusal::AddressMismatch => self.events.push(ConsoleEvent::AddressRejected),
                other => self.alerts.push(Alert {
                    level: AlertLevel::Warning,
                    message: other.to_string(),
                    tick: self.time.tick,
                }),
            }
        }
    }

    /// Take the next incoming call, abandoning any call still on the board.
    fn start_call(&mut self) {
        if self.controller.phase() != CallPhase::Idle {
            self.alerts.push(Alert {
                level: AlertLevel::Info,
                message: "caller disconnected: previous call abandoned".to_string(),
                tick: self.time.tick,
            });
        }
        self.controller.start_call(
            &mut self.rng,
            &self.catalog,
            self.time.tick,
            &mut self.events,
        );
    }

    /// Toggle a unit in the selection, refusing unknown or committed units.
    fn toggle_unit(&mut self, call_sign: &str) -> Result<(), Refusal> {
        let status =
            roster::unit_status(&self.world, call_sign).ok_or_else(|| Refusal::UnknownUnit {
                call_sign: call_sign.to_string(),
            })?;
        if status != UnitStatus::Available {
            return Err(Refusal::UnitBusy {
                call_sign: call_sign.to_string(),
            });
        }
        self.controller.toggle_unit(call_sign, &mut self.events)
    }

    /// Commit the dispatch and mark every listed unit en route.
    fn dispatch(&mut self) -> Result<(), Refusal> {
        let order = self.controller.take_dispatch_order(&mut self.events)?;
        for call_sign in &order.units {
            roster::assign(&mut self.world, call_sign, order.location);
        }
        Ok(())
    }

    /// Return a unit to its station.
    fn recall_unit(&mut self, call_sign: &str) -> Result<(), Refusal> {
        roster::recall(&mut self.world, call_sign)?;
        self.events.push(ConsoleEvent::UnitRecalled {
            call_sign: call_sign.to_string(),
        });
        Ok(())
    }
}
