//! Refusal reasons for operator commands.
//!
//! Every refusal is recoverable and local: the command is dropped, state is
//! unchanged, and the reason is surfaced to the console. Nothing here is
//! fatal to the process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an operator command was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Refusal {
    /// The operation is not valid in the current workflow state.
    #[error("{attempted}: not valid right now")]
    InvalidTransition { attempted: String },
    /// The typed address failed the containment match.
    #[error("address did not match the caller's location")]
    AddressMismatch,
    /// Dispatch attempted before the location was verified.
    #[error("location not verified")]
    NotVerified,
    /// Dispatch attempted with no units selected.
    #[error("no units selected")]
    NoSelection,
    /// No unit with that call sign exists on the roster.
    #[error("unknown unit {call_sign}")]
    UnknownUnit { call_sign: String },
    /// The unit is already committed to an incident.
    #[error("{call_sign} is already committed")]
    UnitBusy { call_sign: String },
}

impl Refusal {
    pub fn invalid(attempted: impl Into<String>) -> Self {
        Refusal::InvalidTransition {
            attempted: attempted.into(),
        }
    }
}
