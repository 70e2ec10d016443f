//! The interactive command loop

use crate::command::executor::{global_summary, print_help, CommandExecutor, Flow};
use crate::command::input::Prompter;
use crate::command::parser::parse_command_line;
use crate::core::error::{Result, TrackerError};
use crate::session::Session;
use std::io::{BufRead, Write};

/// Run commands until the operator quits or the input closes
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    tracing::info!("Session started");

    if session.config().show_welcome {
        match welcome(prompter) {
            Err(TrackerError::EndOfInput) => return Ok(()),
            other => other?,
        }
    }
    print_help(prompter)?;

    loop {
        prompter.say("")?;
        prompter.say("Enter Command:")?;
        let line = match prompter.read_line() {
            Ok(line) => line,
            Err(TrackerError::EndOfInput) => break,
            Err(error) => return Err(error),
        };
        prompter.say("")?;

        let command_line = match parse_command_line(&line) {
            Ok(Some(command_line)) => command_line,
            Ok(None) => continue,
            Err(key) => {
                tracing::warn!("Unknown command key {:?}", key);
                prompter.say(format!("Unknown command '{}'. Enter '?' for help.", key))?;
                continue;
            }
        };

        prompter.clear_pending();
        prompter.prefill(command_line.args);

        match CommandExecutor::execute(session, prompter, command_line.command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(TrackerError::Aborted) => {
                tracing::debug!("{:?} aborted", command_line.command);
                prompter.say("COMMAND ABORTED")?;
                global_summary(session, prompter)?;
            }
            Err(TrackerError::EndOfInput) => break,
            Err(error @ TrackerError::NoCharacters) => prompter.say(error)?,
            Err(error) if error.is_recoverable() => prompter.say(error)?,
            Err(error) => return Err(error),
        }
    }

    tracing::info!("Session ended with {} characters", session.len());
    Ok(())
}

fn welcome<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    prompter.say("Welcome to Character Tracker!")?;
    prompter.say("This program supports tracking multiple characters at once, but it is advised")?;
    prompter.say("for screen sharers to track their own characters on separate screens.")?;
    prompter.say("")?;
    prompter.say("Enter anything to continue...")?;
    prompter.read_line()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TrackerConfig;
    use std::io::Cursor;

    fn run(input: &str, show_welcome: bool) -> (Session, String) {
        let config = TrackerConfig {
            show_welcome,
            ..TrackerConfig::default()
        };
        let mut session = Session::new(config);
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_session(&mut session, &mut prompter).unwrap();
        let out = String::from_utf8(prompter.into_writer()).unwrap();
        (session, out)
    }

    #[test]
    fn test_welcome_waits_for_a_line() {
        let (_, out) = run("\n", true);
        assert!(out.starts_with("Welcome to Character Tracker!"));
        assert!(out.contains("--HELP MENU--"));
    }

    #[test]
    fn test_empty_input_ends_quietly() {
        let (session, out) = run("", true);
        assert!(session.is_empty());
        assert!(!out.contains("--HELP MENU--"));
    }

    #[test]
    fn test_unknown_command_hint() {
        let (_, out) = run("x\n", false);
        assert!(out.contains("Unknown command 'x'. Enter '?' for help."));
    }

    #[test]
    fn test_abort_prints_global_summary() {
        let (session, out) = run("a Hero 100 5\nd 30\n~\n", false);
        assert!(out.contains("COMMAND ABORTED"));
        assert!(out.contains("----GLOBAL SUMMARY----"));
        assert!((session.get("Hero").unwrap().magnitude() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_characters_message() {
        let (_, out) = run("s\n", false);
        assert!(out.contains("No characters have been added yet"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run("q\nY\nY\na Late 1 1\n", false);
        assert!(session.is_empty());
    }
}
