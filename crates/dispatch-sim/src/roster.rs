//! Standing unit roster — spawn factories and world lookups.
//!
//! Units persist for the process lifetime; they are never despawned, only
//! reset to `Available` at their station on recall.

use hecs::World;

use dispatch_core::components::{MotionTarget, Position, Station, UnitInfo};
use dispatch_core::constants::{AIR_UNIT_SPEED, ENGINE_SPEED, MEDIC_SPEED, PATROL_SPEED};
use dispatch_core::enums::{UnitKind, UnitStatus};
use dispatch_core::error::Refusal;
use dispatch_core::types::MapPoint;

/// Call sign, kind, speed, and station for every standing unit.
const ROSTER: &[(&str, UnitKind, f64, (f64, f64))] = &[
    ("PD1", UnitKind::Patrol, PATROL_SPEED, (0.12, 0.10)),
    ("PD2", UnitKind::Patrol, PATROL_SPEED, (0.15, 0.10)),
    ("EMS1", UnitKind::Medic, MEDIC_SPEED, (0.90, 0.18)),
    ("FD1", UnitKind::Engine, ENGINE_SPEED, (0.48, 0.92)),
    ("AIR1", UnitKind::AirUnit, AIR_UNIT_SPEED, (0.88, 0.85)),
];

/// Spawn the standing units at their stations.
pub fn spawn_units(world: &mut World) {
    for &(call_sign, kind, speed, (x, y)) in ROSTER {
        let station = MapPoint::new(x, y);
        world.spawn((
            UnitInfo {
                call_sign: call_sign.to_string(),
                kind,
                speed,
            },
            Position(station),
            Station(station),
            MotionTarget(None),
            UnitStatus::Available,
        ));
    }
}

/// Look up a unit's status by call sign.
pub fn unit_status(world: &World, call_sign: &str) -> Option<UnitStatus> {
    world
        .query::<(&UnitInfo, &UnitStatus)>()
        .iter()
        .find_map(|(_, (info, status))| (info.call_sign == call_sign).then_some(*status))
}

/// Commit a unit to an incident location.
pub fn assign(world: &mut World, call_sign: &str, location: MapPoint) {
    for (_entity, (info, target, status)) in
        world.query_mut::<(&UnitInfo, &mut MotionTarget, &mut UnitStatus)>()
    {
        if info.call_sign == call_sign {
            *status = UnitStatus::EnRoute;
            target.0 = Some(location);
        }
    }
}

/// Return a committed unit to its station: snap position home, clear the
/// target, mark it available.
pub fn recall(world: &mut World, call_sign: &str) -> Result<(), Refusal> {
    for (_entity, (info, pos, station, target, status)) in world.query_mut::<(
        &UnitInfo,
        &mut Position,
        &Station,
        &mut MotionTarget,
        &mut UnitStatus,
    )>() {
        if info.call_sign != call_sign {
            continue;
        }
        if *status == UnitStatus::Available {
            return Err(Refusal::invalid("recall"));
        }
        *status = UnitStatus::Available;
        target.0 = None;
        pos.0 = station.0;
        return Ok(());
    }
    Err(Refusal::UnknownUnit {
        call_sign: call_sign.to_string(),
    })
}
