//! Call-taking and dispatch workflow state machine.
//!
//! Owns the single active-call slot and the operator's unit selection.
//! All operations are synchronous local-state transitions: a refused
//! operation returns a `Refusal` and leaves every field untouched. The
//! controller knows nothing about the unit world — the engine validates
//! call signs and executes committed dispatches.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use dispatch_core::constants::{
    MIN_ADDRESS_INPUT, PICKUP_DELAY_MAX_TICKS, PICKUP_DELAY_MIN_TICKS,
};
use dispatch_core::enums::CallPhase;
use dispatch_core::error::Refusal;
use dispatch_core::events::ConsoleEvent;
use dispatch_core::scenario::Scenario;
use dispatch_core::types::MapPoint;

/// The call currently being worked. At most one exists at a time.
///
/// Invariant: `resolved_location.is_some()` iff `verified`.
#[derive(Debug, Clone)]
pub struct ActiveCall {
    pub scenario: Scenario,
    pub verified: bool,
    pub resolved_location: Option<MapPoint>,
}

/// A committed dispatch handed to the engine for execution against the
/// unit world.
#[derive(Debug, Clone)]
pub struct CommittedDispatch {
    /// Call signs in selection order.
    pub units: Vec<String>,
    pub location: MapPoint,
    pub address: String,
}

/// The workflow state machine: `Idle -> Ringing -> Verified -> Idle`.
pub struct CallController {
    phase: CallPhase,
    active: Option<ActiveCall>,
    selection: Vec<String>,
    /// Tick at which the caller's intro line is delivered (call pickup).
    pending_intro: Option<u64>,
}

impl CallController {
    pub fn new() -> Self {
        Self {
            phase: CallPhase::Idle,
            active: None,
            selection: Vec::new(),
            pending_intro: None,
        }
    }

    pub fn phase(&self) -> CallPhase {
        self.phase
    }

    pub fn active(&self) -> Option<&ActiveCall> {
        self.active.as_ref()
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn is_selected(&self, call_sign: &str) -> bool {
        self.selection.iter().any(|s| s == call_sign)
    }

    pub fn can_dispatch(&self) -> bool {
        self.phase == CallPhase::Verified && !self.selection.is_empty()
    }

    /// Take the next incoming call. Allowed from any phase: a pending call
    /// is discarded and replaced (forced reset).
    ///
    /// Draws a scenario uniformly at random (the catalog must be non-empty),
    /// clears the selection, and schedules the caller's intro line after a
    /// randomized pickup latency.
    pub fn start_call(
        &mut self,
        rng: &mut ChaCha8Rng,
        catalog: &[Scenario],
        now: u64,
        events: &mut Vec<ConsoleEvent>,
    ) {
        let scenario = catalog[rng.gen_range(0..catalog.len())].clone();
        let pickup = now + rng.gen_range(PICKUP_DELAY_MIN_TICKS..=PICKUP_DELAY_MAX_TICKS);

        events.push(ConsoleEvent::CallIncoming {
            incident: scenario.incident.clone(),
            priority: scenario.priority,
        });
        events.push(ConsoleEvent::DispatcherDialogue {
            text: "911, what is your emergency?".to_string(),
        });

        self.active = Some(ActiveCall {
            scenario,
            verified: false,
            resolved_location: None,
        });
        self.selection.clear();
        self.pending_intro = Some(pickup);
        self.phase = CallPhase::Ringing;
    }

    /// Deliver the caller's intro line once the pickup latency has elapsed.
    /// Called by the engine every tick.
    pub fn deliver_pending_intro(&mut self, now: u64, events: &mut Vec<ConsoleEvent>) {
        match self.pending_intro {
            Some(due) if now >= due => {}
            _ => return,
        }
        self.pending_intro = None;

        if let Some(call) = &self.active {
            events.push(ConsoleEvent::CallerDialogue {
                text: call.scenario.intro_line.clone(),
                channel: call.scenario.channel,
            });
        }
    }

    /// Verify the caller's address against the operator's input.
    ///
    /// Allowed while a call is up (`Ringing` or `Verified` — re-verifying
    /// with correct input is idempotent). The match is deliberately loose:
    /// it tolerates partial and abbreviated input, which also means any
    /// long-enough fragment of the canonical address is accepted.
    pub fn verify_address(
        &mut self,
        input: &str,
        events: &mut Vec<ConsoleEvent>,
    ) -> Result<(), Refusal> {
        if !matches!(self.phase, CallPhase::Ringing | CallPhase::Verified) {
            return Err(Refusal::invalid("verify address"));
        }
        let call = match self.active.as_mut() {
            Some(call) => call,
            None => return Err(Refusal::invalid("verify address")),
        };

        let input = input.trim().to_uppercase();
        if !address_matches(&call.scenario.address, &input) {
            return Err(Refusal::AddressMismatch);
        }

        call.verified = true;
        call.resolved_location = Some(call.scenario.location);
        self.phase = CallPhase::Verified;
        events.push(ConsoleEvent::LocationLocked {
            address: call.scenario.address.clone(),
            location: call.scenario.location,
        });
        Ok(())
    }

    /// Ask the caller to repeat their location.
    pub fn request_details(&mut self, events: &mut Vec<ConsoleEvent>) -> Result<(), Refusal> {
        if !matches!(self.phase, CallPhase::Ringing | CallPhase::Verified) {
            return Err(Refusal::invalid("request details"));
        }
        let call = match self.active.as_ref() {
            Some(call) => call,
            None => return Err(Refusal::invalid("request details")),
        };

        events.push(ConsoleEvent::CallerDialogue {
            text: call.scenario.detail_line.clone(),
            channel: call.scenario.channel,
        });
        Ok(())
    }

    /// Toggle a unit in the dispatch selection. Selection may begin while
    /// the call is still ringing. The engine validates the call sign
    /// against the roster before calling this.
    pub fn toggle_unit(
        &mut self,
        call_sign: &str,
        events: &mut Vec<ConsoleEvent>,
    ) -> Result<(), Refusal> {
        if !matches!(self.phase, CallPhase::Ringing | CallPhase::Verified) {
            return Err(Refusal::invalid("select unit"));
        }

        match self.selection.iter().position(|s| s == call_sign) {
            Some(idx) => {
                self.selection.remove(idx);
            }
            None => self.selection.push(call_sign.to_string()),
        }
        events.push(ConsoleEvent::SelectionChanged {
            selected: self.selection.clone(),
        });
        Ok(())
    }

    /// Commit the dispatch: consume the active call and selection, return
    /// the order for the engine to execute. The whole transition is atomic —
    /// any refusal leaves call, selection, and phase exactly as they were.
    pub fn take_dispatch_order(
        &mut self,
        events: &mut Vec<ConsoleEvent>,
    ) -> Result<CommittedDispatch, Refusal> {
        match self.phase {
            CallPhase::Idle => return Err(Refusal::invalid("dispatch")),
            CallPhase::Ringing => return Err(Refusal::NotVerified),
            CallPhase::Verified => {}
        }
        if self.selection.is_empty() {
            return Err(Refusal::NoSelection);
        }
        let call = match self.active.take() {
            Some(call) => call,
            None => return Err(Refusal::invalid("dispatch")),
        };
        let location = match call.resolved_location {
            Some(location) => location,
            None => {
                self.active = Some(call);
                return Err(Refusal::NotVerified);
            }
        };

        // Preconditions hold: commit.
        let units = std::mem::take(&mut self.selection);
        let address = call.scenario.address;
        self.pending_intro = None;
        self.phase = CallPhase::Idle;

        events.push(ConsoleEvent::DispatchOrder {
            units: units.clone(),
            address: address.clone(),
        });
        events.push(ConsoleEvent::DispatcherDialogue {
            text: format!("Dispatching {} to {}. Code 3.", units.join(", "), address),
        });

        Ok(CommittedDispatch {
            units,
            location,
            address,
        })
    }
}

impl Default for CallController {
    fn default() -> Self {
        Self::new()
    }
}

/// Loose containment match against the canonical address. Both sides are
/// uppercase. Succeeds when the canonical address contains the input, or
/// the input contains the canonical address's first token.
fn address_matches(canonical: &str, input: &str) -> bool {
    if input.len() < MIN_ADDRESS_INPUT {
        return false;
    }
    let first_token = canonical.split(' ').next().unwrap_or(canonical);
    canonical.contains(input) || input.contains(first_token)
}

#[cfg(test)]
mod tests {
    use super::address_matches;

    #[test]
    fn test_address_match_substring() {
        assert!(address_matches("6892 PARKVIEW PL", "PARKVIEW"));
        assert!(address_matches("6892 PARKVIEW PL", "6892 PARKVIEW PL"));
    }

    #[test]
    fn test_address_match_first_token() {
        // Operator typed more than the canonical string, but it carries the
        // house number.
        assert!(address_matches(
            "6892 PARKVIEW PL",
            "6892 PARKVIEW PLACE APT 2"
        ));
    }

    #[test]
    fn test_address_match_rejects() {
        assert!(!address_matches("6892 PARKVIEW PL", "ZZZZZ"));
        // Too short, even though it is a genuine fragment.
        assert!(!address_matches("6892 PARKVIEW PL", "689"));
        assert!(!address_matches("6892 PARKVIEW PL", ""));
    }

    #[test]
    fn test_address_match_false_accept() {
        // Known heuristic behavior: any long-enough fragment passes.
        assert!(address_matches("6892 PARKVIEW PL", "VIEW PL"));
    }
}
