//! Simulation engine for the dispatch console.
//!
//! Owns the hecs ECS world of responder units, runs the call/dispatch
//! workflow state machine at a fixed tick rate, and produces
//! `BoardSnapshot`s for the frontend.

pub mod controller;
pub mod engine;
pub mod roster;
pub mod systems;
pub mod voice;

pub use dispatch_core as core;
pub use engine::DispatchEngine;
