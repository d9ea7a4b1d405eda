//! Snapshot system: reads the world and controller and builds a complete
//! `BoardSnapshot`.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use dispatch_core::components::{MotionTarget, Position, Station, UnitInfo};
use dispatch_core::enums::UnitStatus;
use dispatch_core::events::{Alert, ConsoleEvent};
use dispatch_core::state::{ActiveCallView, BoardSnapshot, UnitView};
use dispatch_core::types::SimTime;

use crate::controller::{ActiveCall, CallController};

/// Build a complete BoardSnapshot from the current simulation state.
pub fn build(
    world: &World,
    controller: &CallController,
    time: &SimTime,
    events: Vec<ConsoleEvent>,
    alerts: Vec<Alert>,
) -> BoardSnapshot {
    BoardSnapshot {
        time: *time,
        phase: controller.phase(),
        call: controller.active().map(build_call_view),
        selection: controller.selection().to_vec(),
        units: build_units(world),
        events,
        alerts,
    }
}

fn build_call_view(call: &ActiveCall) -> ActiveCallView {
    ActiveCallView {
        incident: call.scenario.incident.clone(),
        priority: call.scenario.priority,
        channel: call.scenario.channel,
        verified: call.verified,
        address: call.verified.then(|| call.scenario.address.clone()),
    }
}

/// Build the unit list, sorted by call sign for deterministic serialization.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&UnitInfo, &Position, &Station, &MotionTarget, &UnitStatus)>()
        .iter()
        .map(|(_, (info, pos, station, target, status))| UnitView {
            call_sign: info.call_sign.clone(),
            kind: info.kind,
            status: *status,
            position: pos.0,
            target: target.0,
            home: station.0,
        })
        .collect();

    units.sort_by(|a, b| a.call_sign.cmp(&b.call_sign));
    units
}
