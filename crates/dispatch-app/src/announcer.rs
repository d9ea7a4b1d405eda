//! Speech and console output.
//!
//! Announcements are fire-and-forget: the simulation never waits on
//! playback, and a new announcement may supersede one still rendering.
//! That cancellation policy belongs to the implementation, not the core.

use dispatch_core::enums::{VoiceChannel, VoiceProfile};
use dispatch_core::events::ConsoleEvent;
use dispatch_core::state::BoardSnapshot;

/// Capability interface for voice output.
pub trait Announcer {
    fn announce(&self, text: &str, profile: VoiceProfile);
}

/// Renders announcements as prefixed console lines.
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn announce(&self, text: &str, profile: VoiceProfile) {
        let prefix = match profile {
            VoiceProfile::Dispatcher => "DISP",
            VoiceProfile::Caller => "CALLER",
            VoiceProfile::Robotic => "AUTO",
        };
        println!("[{prefix}] {text}");
    }
}

/// Render one tick's events: dialogue goes to the announcer, everything
/// else to the radio log.
pub fn render_snapshot(snapshot: &BoardSnapshot, announcer: &(dyn Announcer + Send + Sync)) {
    for event in &snapshot.events {
        match event {
            ConsoleEvent::CallIncoming { incident, priority } => {
                println!("*** INCOMING CALL: {incident} ({priority:?}) ***");
            }
            ConsoleEvent::DispatcherDialogue { text } => {
                announcer.announce(text, VoiceProfile::Dispatcher);
            }
            ConsoleEvent::CallerDialogue { text, channel } => match channel {
                // Text-to-911 lines are never spoken.
                VoiceChannel::TextOnly => println!("[SMS] {text}"),
                VoiceChannel::Automated => announcer.announce(text, VoiceProfile::Robotic),
                VoiceChannel::Normal => announcer.announce(text, VoiceProfile::Caller),
            },
            ConsoleEvent::LocationLocked { address, .. } => {
                println!("LOCATION LOCKED: {address}");
            }
            ConsoleEvent::AddressRejected => {
                println!("ADDRESS INVALID. ASK CALLER AGAIN.");
            }
            ConsoleEvent::SelectionChanged { selected } => {
                println!("UNITS SELECTED: {}", selected.join(", "));
            }
            ConsoleEvent::DispatchOrder { units, address } => {
                log::info!("dispatch order: {} -> {}", units.join(", "), address);
            }
            ConsoleEvent::UnitArrived { call_sign } => {
                println!("{call_sign} ON SCENE");
            }
            ConsoleEvent::UnitRecalled { call_sign } => {
                println!("{call_sign} RETURNING TO STATION");
            }
        }
    }

    for alert in &snapshot.alerts {
        println!("[{:?}] {}", alert.level, alert.message);
    }
}
