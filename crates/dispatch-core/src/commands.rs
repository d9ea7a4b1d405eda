//! Operator commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Call taking ---
    /// Take the next incoming call. Allowed at any time: a pending call is
    /// abandoned and replaced.
    StartCall,
    /// Verify the caller's address against what the operator typed.
    VerifyAddress { input: String },
    /// Ask the caller to repeat their location.
    RequestDetails,

    // --- Dispatch ---
    /// Toggle a unit in the dispatch selection.
    ToggleUnit { call_sign: String },
    /// Commit the dispatch: send all selected units to the verified location.
    Dispatch,
    /// Return a committed unit to its station.
    RecallUnit { call_sign: String },
}
