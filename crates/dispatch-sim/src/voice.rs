//! Keyword matcher for recognized radio speech.
//!
//! Maps a raw transcript onto a small closed command vocabulary using
//! lowercased substring checks. This is deliberately not language
//! understanding: spelled-out numerals ("unit one") miss, and a keyword
//! anywhere in the sentence matches.

/// What to do with a unit named over the radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitAction {
    /// Select the unit for the current call.
    Respond,
    /// Stand the unit down and return it to its station.
    Clear,
}

/// A recognized radio command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceCommand {
    /// The operator asked the caller for their location.
    AskLocation,
    Unit {
        call_sign: String,
        action: UnitAction,
    },
}

const LOCATION_KEYWORDS: &[&str] = &["where", "address", "location"];

const RESPOND_KEYWORDS: &[&str] = &["respond", "send", "dispatch", "start"];

const CLEAR_KEYWORDS: &[&str] = &["clear", "cancel", "stand down"];

/// Substring aliases for each unit call sign.
const UNIT_ALIASES: &[(&str, &[&str])] = &[
    ("PD1", &["pd1", "pd 1"]),
    ("PD2", &["pd2", "pd 2"]),
    ("EMS1", &["ems1", "ems 1", "medic1", "medic 1"]),
    ("FD1", &["fd1", "fd 1", "engine1", "engine 1"]),
    ("AIR1", &["air1", "air 1"]),
];

/// Parse a transcript. Returns `None` when no keyword matches.
pub fn parse(transcript: &str) -> Option<VoiceCommand> {
    let lower = transcript.to_lowercase();

    if LOCATION_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Some(VoiceCommand::AskLocation);
    }

    let call_sign = UNIT_ALIASES.iter().find_map(|(sign, aliases)| {
        aliases
            .iter()
            .any(|alias| lower.contains(alias))
            .then(|| sign.to_string())
    })?;

    let action = if RESPOND_KEYWORDS.iter().any(|k| lower.contains(k)) {
        UnitAction::Respond
    } else if CLEAR_KEYWORDS.iter().any(|k| lower.contains(k)) {
        UnitAction::Clear
    } else {
        return None;
    };

    Some(VoiceCommand::Unit { call_sign, action })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_question() {
        assert_eq!(parse("where are you calling from"), Some(VoiceCommand::AskLocation));
        assert_eq!(parse("what's the ADDRESS"), Some(VoiceCommand::AskLocation));
    }

    #[test]
    fn test_unit_respond() {
        assert_eq!(
            parse("send pd1 code three"),
            Some(VoiceCommand::Unit {
                call_sign: "PD1".to_string(),
                action: UnitAction::Respond,
            })
        );
        assert_eq!(
            parse("Medic 1 respond"),
            Some(VoiceCommand::Unit {
                call_sign: "EMS1".to_string(),
                action: UnitAction::Respond,
            })
        );
    }

    #[test]
    fn test_unit_clear() {
        assert_eq!(
            parse("pd 2 stand down"),
            Some(VoiceCommand::Unit {
                call_sign: "PD2".to_string(),
                action: UnitAction::Clear,
            })
        );
    }

    #[test]
    fn test_unit_without_action_is_noop() {
        assert_eq!(parse("pd1"), None);
    }

    #[test]
    fn test_spelled_out_numeral_misses() {
        // Known false-negative of the substring vocabulary.
        assert_eq!(parse("unit one respond"), None);
    }

    #[test]
    fn test_no_keyword() {
        assert_eq!(parse("good morning dispatch center"), None);
    }
}
