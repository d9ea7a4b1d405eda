//! Board state snapshot — the complete visible state sent to the frontend
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{CallPhase, Priority, UnitKind, UnitStatus, VoiceChannel};
use crate::events::{Alert, ConsoleEvent};
use crate::types::{MapPoint, SimTime};

/// Complete board state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub time: SimTime,
    pub phase: CallPhase,
    pub call: Option<ActiveCallView>,
    /// Call signs currently selected for dispatch, in selection order.
    pub selection: Vec<String>,
    pub units: Vec<UnitView>,
    pub events: Vec<ConsoleEvent>,
    pub alerts: Vec<Alert>,
}

/// The call currently being worked, as visible to the operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveCallView {
    pub incident: String,
    pub priority: Priority,
    pub channel: VoiceChannel,
    pub verified: bool,
    /// Populated only once verified; the board shows "pending verification"
    /// until then.
    pub address: Option<String>,
}

/// A responder unit on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub call_sign: String,
    pub kind: UnitKind,
    pub status: UnitStatus,
    pub position: MapPoint,
    pub target: Option<MapPoint>,
    pub home: MapPoint,
}
