//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Call taking ---

/// Minimum address input length before the containment match is attempted.
pub const MIN_ADDRESS_INPUT: usize = 4;

/// Shortest simulated call-pickup latency (ticks) before the caller's
/// intro line is delivered. 1.5 seconds at 30 Hz.
pub const PICKUP_DELAY_MIN_TICKS: u64 = 45;

/// Longest simulated call-pickup latency (ticks). 3.5 seconds at 30 Hz.
pub const PICKUP_DELAY_MAX_TICKS: u64 = 105;

// --- Unit motion ---

/// Distance (normalized map units) at which a unit counts as arrived.
pub const ARRIVAL_RADIUS: f64 = 0.005;

/// Patrol car step per tick (map fraction).
pub const PATROL_SPEED: f64 = 0.008;

/// Medic unit step per tick.
pub const MEDIC_SPEED: f64 = 0.007;

/// Fire engine step per tick.
pub const ENGINE_SPEED: f64 = 0.006;

/// Air unit step per tick — fastest responder, ignores streets.
pub const AIR_UNIT_SPEED: f64 = 0.014;
