//! ECS components for responder unit entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::UnitKind;
use crate::types::MapPoint;

/// Static identity of a responder unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Radio call sign, e.g. "PD1".
    pub call_sign: String,
    pub kind: UnitKind,
    /// Step length per tick (map fraction). Ticks are uniform, so this is
    /// the unit's speed.
    pub speed: f64,
}

/// Current map position of a unit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position(pub MapPoint);

/// Where the unit is headed. `None` iff the unit is available.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MotionTarget(pub Option<MapPoint>);

/// The unit's home station, where recalls return it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Station(pub MapPoint);
