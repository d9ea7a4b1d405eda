//! Terminal dispatch console.
//!
//! Reads operator commands from stdin and drives the simulation loop
//! thread. Radio transcripts can be fed through the keyword matcher with
//! `say` to exercise the voice-command path.

mod announcer;
mod game_loop;

use std::io::{self, BufRead};
use std::sync::{Arc, Mutex};

use dispatch_core::commands::OperatorCommand;
use dispatch_core::state::BoardSnapshot;
use dispatch_sim::voice::{self, UnitAction, VoiceCommand};

use crate::announcer::{Announcer, ConsoleAnnouncer};
use crate::game_loop::{spawn_game_loop, LoopCommand};

const HELP: &str = "\
commands:
  call                take the next incoming call
  verify <address>    verify the caller's address
  details             ask the caller to repeat the location
  unit <sign>         toggle a unit (PD1, PD2, EMS1, FD1, AIR1)
  dispatch            send the selected units
  recall <sign>       return a unit to its station
  say <transcript>    run a radio transcript through the keyword matcher
  status              print the current board snapshot
  quit";

/// One parsed REPL line.
#[derive(Debug)]
enum ReplAction {
    Send(OperatorCommand),
    Say(String),
    Status,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Option<ReplAction> {
    let line = line.trim();
    let (head, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_lowercase().as_str() {
        "call" => Some(ReplAction::Send(OperatorCommand::StartCall)),
        "verify" if !rest.is_empty() => Some(ReplAction::Send(OperatorCommand::VerifyAddress {
            input: rest.to_string(),
        })),
        "details" => Some(ReplAction::Send(OperatorCommand::RequestDetails)),
        "unit" if !rest.is_empty() => Some(ReplAction::Send(OperatorCommand::ToggleUnit {
            call_sign: rest.to_uppercase(),
        })),
        "dispatch" => Some(ReplAction::Send(OperatorCommand::Dispatch)),
        "recall" if !rest.is_empty() => Some(ReplAction::Send(OperatorCommand::RecallUnit {
            call_sign: rest.to_uppercase(),
        })),
        "say" if !rest.is_empty() => Some(ReplAction::Say(rest.to_string())),
        "status" => Some(ReplAction::Status),
        "help" => Some(ReplAction::Help),
        "quit" | "exit" => Some(ReplAction::Quit),
        _ => None,
    }
}

/// Map a recognized voice command onto an operator command.
fn voice_to_command(cmd: VoiceCommand) -> OperatorCommand {
    match cmd {
        VoiceCommand::AskLocation => OperatorCommand::RequestDetails,
        VoiceCommand::Unit {
            call_sign,
            action: UnitAction::Respond,
        } => OperatorCommand::ToggleUnit { call_sign },
        VoiceCommand::Unit {
            call_sign,
            action: UnitAction::Clear,
        } => OperatorCommand::RecallUnit { call_sign },
    }
}

fn print_status(latest: &Mutex<Option<BoardSnapshot>>) {
    let lock = match latest.lock() {
        Ok(lock) => lock,
        Err(_) => return,
    };
    match lock.as_ref() {
        Some(snapshot) => match serde_json::to_string_pretty(snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to serialize snapshot: {err}"),
        },
        None => println!("no snapshot yet"),
    }
}

fn main() {
    env_logger::init();

    let latest_snapshot = Arc::new(Mutex::new(None));
    let announcer: Arc<dyn Announcer + Send + Sync> = Arc::new(ConsoleAnnouncer);
    let cmd_tx = spawn_game_loop(announcer, Arc::clone(&latest_snapshot));

    println!("{HELP}");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        match parse_line(&line) {
            Some(ReplAction::Send(cmd)) => {
                let _ = cmd_tx.send(LoopCommand::Operator(cmd));
            }
            Some(ReplAction::Say(text)) => match voice::parse(&text) {
                Some(cmd) => {
                    let _ = cmd_tx.send(LoopCommand::Operator(voice_to_command(cmd)));
                }
                None => println!("no keyword recognized"),
            },
            Some(ReplAction::Status) => print_status(&latest_snapshot),
            Some(ReplAction::Help) => println!("{HELP}"),
            Some(ReplAction::Quit) => break,
            None => println!("unrecognized command (try 'help')"),
        }
    }

    let _ = cmd_tx.send(LoopCommand::Shutdown);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert!(matches!(
            parse_line("call"),
            Some(ReplAction::Send(OperatorCommand::StartCall))
        ));
        assert!(matches!(
            parse_line("dispatch"),
            Some(ReplAction::Send(OperatorCommand::Dispatch))
        ));
        assert!(matches!(parse_line("quit"), Some(ReplAction::Quit)));
        assert!(matches!(parse_line("status"), Some(ReplAction::Status)));
    }

    #[test]
    fn test_parse_uppercases_call_signs() {
        match parse_line("unit pd1") {
            Some(ReplAction::Send(OperatorCommand::ToggleUnit { call_sign })) => {
                assert_eq!(call_sign, "PD1");
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_parse_keeps_address_verbatim() {
        match parse_line("verify 6892 Parkview Pl") {
            Some(ReplAction::Send(OperatorCommand::VerifyAddress { input })) => {
                assert_eq!(input, "6892 Parkview Pl");
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bare_args_commands() {
        assert!(parse_line("verify").is_none());
        assert!(parse_line("unit").is_none());
        assert!(parse_line("nonsense").is_none());
    }

    #[test]
    fn test_voice_mapping() {
        assert!(matches!(
            voice_to_command(VoiceCommand::AskLocation),
            OperatorCommand::RequestDetails
        ));
        match voice_to_command(VoiceCommand::Unit {
            call_sign: "PD1".to_string(),
            action: UnitAction::Clear,
        }) {
            OperatorCommand::RecallUnit { call_sign } => assert_eq!(call_sign, "PD1"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
