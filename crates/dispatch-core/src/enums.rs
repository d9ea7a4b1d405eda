//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Incident severity tier, ordered low to extreme.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Responder unit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Patrol car (police).
    Patrol,
    /// Ambulance / medic unit.
    Medic,
    /// Fire engine.
    Engine,
    /// Helicopter.
    AirUnit,
}

/// Responder unit availability state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitStatus {
    /// At station, eligible for selection.
    #[default]
    Available,
    /// Moving toward an assigned incident.
    EnRoute,
    /// Holding at the incident location.
    OnScene,
}

/// Call-workflow state (top-level controller state).
///
/// Committing a dispatch is instantaneous: the controller returns to `Idle`
/// in the same transition, so no separate dispatched state is observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallPhase {
    /// No call on the board.
    #[default]
    Idle,
    /// Call connected, location not yet verified.
    Ringing,
    /// Location locked; dispatch allowed once units are selected.
    Verified,
}

/// How caller dialogue reaches the operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceChannel {
    /// Live human caller.
    #[default]
    Normal,
    /// Automated alarm system (robotic voice).
    Automated,
    /// Text-to-911 — rendered as text only, never spoken.
    TextOnly,
}

/// Which synthetic voice an announcer should use for a dialogue line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceProfile {
    /// The operator's own outgoing radio/phone voice.
    Dispatcher,
    /// A human caller.
    Caller,
    /// An automated reporting system.
    Robotic,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
