//! Scenario catalog — the scripted emergency calls.
//!
//! Scenarios are static, immutable templates; the engine draws one
//! uniformly at random when a call comes in. They carry no mutable state.

use serde::{Deserialize, Serialize};

use crate::enums::{Priority, VoiceChannel};
use crate::types::MapPoint;

/// One scripted emergency call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Incident category label, e.g. "STRUCTURE FIRE".
    pub incident: String,
    pub priority: Priority,
    /// Canonical address, uppercase. Verification matches against this.
    pub address: String,
    /// What the caller says when the call is picked up.
    pub intro_line: String,
    /// What the caller says when asked for their location.
    pub detail_line: String,
    /// Incident position on the normalized map.
    pub location: MapPoint,
    pub channel: VoiceChannel,
}

/// The built-in catalog of scripted incidents.
pub fn default_catalog() -> Vec<Scenario> {
    vec![
        scenario(
            "DOMESTIC DISTURBANCE",
            Priority::High,
            "6892 PARKVIEW PL",
            "He's screaming at me and throwing things! Please help!",
            "My husband, he's drunk. We are at 6892 Parkview Place. He has a knife!",
            MapPoint::new(0.2, 0.3),
            VoiceChannel::Normal,
        ),
        scenario(
            "MEDICAL EMERGENCY",
            Priority::Medium,
            "EDGEWATER APTS BLDG 5",
            "My roommate isn't waking up... I think she took something.",
            "Edgewater Apartment Complex, Building 5, Room 8. Please hurry!",
            MapPoint::new(0.8, 0.2),
            VoiceChannel::Normal,
        ),
        scenario(
            "STRUCTURE FIRE",
            Priority::Critical,
            "3762 CLEVEMONT WAY",
            "My kitchen is on fire! The curtains caught fire!",
            "3762 Clevemont Way! Everyone is out but the dog is inside!",
            MapPoint::new(0.5, 0.6),
            VoiceChannel::Normal,
        ),
        scenario(
            "SUSPICIOUS PERSON",
            Priority::Low,
            "3339 AUTUMN LAKE LN",
            "There is a man looking into car windows on my street.",
            "3339 Autumn Lake Lane. He's wearing a black hoodie and carrying a bag.",
            MapPoint::new(0.3, 0.8),
            VoiceChannel::Normal,
        ),
        scenario(
            "SILENT ALARM",
            Priority::High,
            "1505 MAZE BANK",
            "Automated Message: Silent Panic Alarm triggered. Zone 4 Vault.",
            "1505 Maze Bank. Multiple sensors tripped. No contact with tellers.",
            MapPoint::new(0.6, 0.4),
            VoiceChannel::Automated,
        ),
        scenario(
            "PROWLER",
            Priority::Medium,
            "441 HARROW CT",
            "TEXT: someone is in my backyard. i can't talk, he'll hear me.",
            "TEXT: 441 harrow court. back gate. please no sirens.",
            MapPoint::new(0.7, 0.7),
            VoiceChannel::TextOnly,
        ),
    ]
}

fn scenario(
    incident: &str,
    priority: Priority,
    address: &str,
    intro_line: &str,
    detail_line: &str,
    location: MapPoint,
    channel: VoiceChannel,
) -> Scenario {
    Scenario {
        incident: incident.to_string(),
        priority,
        address: address.to_string(),
        intro_line: intro_line.to_string(),
        detail_line: detail_line.to_string(),
        location,
        channel,
    }
}
