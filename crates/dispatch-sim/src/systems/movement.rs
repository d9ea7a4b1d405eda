//! Unit motion system.
//!
//! Steps each committed unit toward its target once per tick and flips it
//! to `OnScene` inside the arrival radius. Ticks are uniform, so a unit's
//! speed is a plain per-tick step length. The pass is O(units) and
//! allocation-free.

use glam::DVec2;
use hecs::World;

use dispatch_core::components::{MotionTarget, Position, UnitInfo};
use dispatch_core::constants::ARRIVAL_RADIUS;
use dispatch_core::enums::UnitStatus;
use dispatch_core::events::ConsoleEvent;
use dispatch_core::types::MapPoint;

/// Advance every unit with a target. `UnitArrived` fires on the
/// `EnRoute -> OnScene` transition only, so units holding at the scene
/// stay quiet on subsequent ticks.
pub fn run(world: &mut World, events: &mut Vec<ConsoleEvent>) {
    for (_entity, (info, pos, target, status)) in
        world.query_mut::<(&UnitInfo, &mut Position, &MotionTarget, &mut UnitStatus)>()
    {
        let goal = match target.0 {
            Some(goal) => goal,
            None => continue,
        };

        let here = pos.0.as_dvec2();
        let delta = goal.as_dvec2() - here;
        let dist = delta.length();

        if dist > ARRIVAL_RADIUS {
            pos.0 = MapPoint::from_dvec2(step_toward(here, delta, dist, info.speed));
        } else if *status == UnitStatus::EnRoute {
            *status = UnitStatus::OnScene;
            events.push(ConsoleEvent::UnitArrived {
                call_sign: info.call_sign.clone(),
            });
        }
    }
}

/// One step along the normalized direction, never past the goal.
fn step_toward(here: DVec2, delta: DVec2, dist: f64, speed: f64) -> DVec2 {
    let step = speed.min(dist);
    here + delta * (step / dist)
}
