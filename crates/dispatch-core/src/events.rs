//! Events emitted by the simulation for audio and console feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{AlertLevel, Priority, VoiceChannel};
use crate::types::MapPoint;

/// Console events for the frontend log, speech synthesis, and map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConsoleEvent {
    /// A new call hit the board.
    CallIncoming { incident: String, priority: Priority },
    /// The operator's outgoing line ("911, what is your emergency?",
    /// dispatch readback).
    DispatcherDialogue { text: String },
    /// Caller speech. The intro line arrives after the simulated pickup
    /// latency; detail lines arrive on request.
    CallerDialogue { text: String, channel: VoiceChannel },
    /// Address verification succeeded.
    LocationLocked { address: String, location: MapPoint },
    /// Address verification failed the containment match.
    AddressRejected,
    /// The dispatch selection changed.
    SelectionChanged { selected: Vec<String> },
    /// Units committed to the incident.
    DispatchOrder { units: Vec<String>, address: String },
    /// A unit reached its incident. Emitted exactly once per assignment.
    UnitArrived { call_sign: String },
    /// A unit returned to its station.
    UnitRecalled { call_sign: String },
}

/// Alert for the console alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
