//! Prompt layer between the operator and the session
//!
//! Every answer is validated here, so the character model only ever sees
//! valid values. Bad answers are re-prompted. Typing `~` at any prompt
//! raises [`TrackerError::Aborted`].

use crate::command::parser::{
    parse_integer, parse_positive, OverwriteTarget, ABORT_TOKEN, CONFIRM_NO, CONFIRM_YES,
};
use crate::core::error::{Result, TrackerError};
use crate::session::Session;
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::num::NonZeroU32;

/// Reads answers from a line source and writes prompts to an output
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    /// Answers given ahead of time on the command line
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print one line of output
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Queue answers for the next prompts
    pub fn prefill(&mut self, answers: impl IntoIterator<Item = String>) {
        self.pending.extend(answers);
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Read one raw line, trimmed. Closed input is [`TrackerError::EndOfInput`].
    pub fn read_line(&mut self) -> Result<String> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(TrackerError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Print a prompt and return the answer, honouring prefilled answers
    /// and the abort token
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.next_answer()
    }

    fn next_answer(&mut self) -> Result<String> {
        let answer = match self.pending.pop_front() {
            Some(answer) => answer,
            None => self.read_line()?,
        };

        if answer == ABORT_TOKEN {
            self.pending.clear();
            return Err(TrackerError::Aborted);
        }
        Ok(answer)
    }

    /// Report a rejected answer. Remaining prefilled answers were meant to
    /// follow the rejected one, so they are dropped.
    fn reject(&mut self, message: impl Display) -> Result<()> {
        self.pending.clear();
        self.say(message)
    }

    /// Ask until the answer is an integer
    pub fn scan_integer(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_integer(&answer) {
                Some(value) => return Ok(value),
                None => self.reject("Please enter an integer")?,
            }
        }
    }

    /// Ask until the answer is a positive, non-zero integer
    pub fn scan_positive(&mut self, prompt: &str) -> Result<NonZeroU32> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_positive(&answer) {
                Some(value) => return Ok(value),
                None => self.reject("Please enter a positive, non-zero integer")?,
            }
        }
    }

    /// Ask until the answer is a non-empty name not yet used in the session
    pub fn scan_name(&mut self, session: &Session) -> Result<String> {
        loop {
            let name = self.ask("Enter name:")?;
            if name.is_empty() {
                self.reject("Name cannot be empty")?;
            } else if session.contains(&name) {
                self.reject(TrackerError::DuplicateName(name))?;
            } else {
                return Ok(name);
            }
        }
    }

    /// Pick the target character.
    ///
    /// With exactly one character it is chosen without asking. A
    /// prefilled answer naming that character is still consumed.
    pub fn select_character(&mut self, session: &Session) -> Result<String> {
        if session.is_empty() {
            return Err(TrackerError::NoCharacters);
        }

        if let Some(only) = session.sole_character() {
            if self.pending.front().map(String::as_str) == Some(only) {
                self.pending.pop_front();
            }
            return Ok(only.to_string());
        }

        loop {
            let name = self.ask("Enter character name:")?;
            match session.get(&name) {
                Ok(character) => return Ok(character.name().to_string()),
                Err(error) if error.is_recoverable() => self.reject(error)?,
                Err(error) => return Err(error),
            }
        }
    }

    /// Ask a yes/no question until the answer is `Y` or `N`
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let prompt = format!("{} {}/{}", question, CONFIRM_YES, CONFIRM_NO);
        loop {
            let answer = self.ask(&prompt)?;
            if answer == CONFIRM_YES {
                return Ok(true);
            }
            if answer == CONFIRM_NO {
                return Ok(false);
            }
            self.pending.clear();
        }
    }

    /// Ask which stat the overwrite command should set
    pub fn choose_overwrite_target(&mut self) -> Result<OverwriteTarget> {
        self.say("What would you like to overwrite?")?;
        self.list_overwrite_targets()?;
        loop {
            let answer = self.next_answer()?;
            match OverwriteTarget::from_key(&answer) {
                Some(target) => return Ok(target),
                None => {
                    self.reject("Enter one of the commands.")?;
                    self.list_overwrite_targets()?;
                }
            }
        }
    }

    fn list_overwrite_targets(&mut self) -> Result<()> {
        for target in OverwriteTarget::ALL {
            self.say(format!("'{}' - {}", target.key(), target.label()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_writer()).unwrap()
    }

    fn session_with(names: &[&str]) -> Session {
        let mut session = Session::default();
        for name in names {
            session
                .add(Character::new(
                    *name,
                    NonZeroU32::new(10).unwrap(),
                    NonZeroU32::new(1).unwrap(),
                ))
                .unwrap();
        }
        session
    }

    #[test]
    fn test_scan_positive_reprompts() {
        let mut p = prompter("abc\n0\n-4\n12\n");
        assert_eq!(p.scan_positive("Enter value:").unwrap().get(), 12);
        let out = output(p);
        assert_eq!(out.matches("Enter value:").count(), 4);
        assert_eq!(out.matches("Please enter a positive, non-zero integer").count(), 3);
    }

    #[test]
    fn test_scan_integer_accepts_negative() {
        let mut p = prompter("1.5\n-270\n");
        assert_eq!(p.scan_integer("Angle:").unwrap(), -270);
        assert!(output(p).contains("Please enter an integer"));
    }

    #[test]
    fn test_abort_at_any_prompt() {
        let mut p = prompter("~\n");
        assert!(matches!(p.scan_integer("Angle:"), Err(TrackerError::Aborted)));

        let mut p = prompter("bad\n~\n");
        assert!(matches!(p.scan_positive("Value:"), Err(TrackerError::Aborted)));
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.scan_integer("Angle:"), Err(TrackerError::EndOfInput)));
    }

    #[test]
    fn test_prefilled_answers_come_first() {
        let mut p = prompter("7\n");
        p.prefill(vec!["3".to_string()]);
        assert_eq!(p.scan_positive("A:").unwrap().get(), 3);
        assert_eq!(p.scan_positive("B:").unwrap().get(), 7);
    }

    #[test]
    fn test_rejected_prefill_drops_the_rest() {
        let mut p = prompter("5\n6\n");
        p.prefill(vec!["x".to_string(), "99".to_string()]);
        assert_eq!(p.scan_positive("A:").unwrap().get(), 5);
        assert_eq!(p.scan_positive("B:").unwrap().get(), 6);
    }

    #[test]
    fn test_scan_name_rejects_duplicates() {
        let session = session_with(&["Marcus"]);
        let mut p = prompter("Marcus\n\nElena\n");
        assert_eq!(p.scan_name(&session).unwrap(), "Elena");
        let out = output(p);
        assert!(out.contains("Marcus is already taken!"));
        assert!(out.contains("Name cannot be empty"));
    }

    #[test]
    fn test_scan_name_ignores_surrounding_whitespace() {
        let session = session_with(&["Marcus"]);
        let mut p = prompter("  Marcus \n   \n Elena\n");
        assert_eq!(p.scan_name(&session).unwrap(), "Elena");
        let out = output(p);
        assert!(out.contains("Marcus is already taken!"));
        assert!(out.contains("Name cannot be empty"));
    }

    #[test]
    fn test_select_character() {
        let session = session_with(&["Marcus", "Elena"]);
        let mut p = prompter("Thomas\nElena\n");
        assert_eq!(p.select_character(&session).unwrap(), "Elena");
        assert!(output(p).contains("Character named 'Thomas' not found"));
    }

    #[test]
    fn test_select_sole_character_without_asking() {
        let session = session_with(&["Marcus"]);
        let mut p = prompter("");
        assert_eq!(p.select_character(&session).unwrap(), "Marcus");
        assert!(!output(p).contains("Enter character name:"));

        // A prefilled name for the only character is consumed
        let mut p = prompter("");
        p.prefill(vec!["Marcus".to_string(), "4".to_string()]);
        assert_eq!(p.select_character(&session).unwrap(), "Marcus");
        assert_eq!(p.scan_positive("V:").unwrap().get(), 4);
    }

    #[test]
    fn test_select_from_empty_session() {
        let session = Session::default();
        let mut p = prompter("");
        assert!(matches!(
            p.select_character(&session),
            Err(TrackerError::NoCharacters)
        ));
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("maybe\ny\nY\n");
        assert!(p.confirm("Are you sure?").unwrap());
        assert_eq!(output(p).matches("Are you sure? Y/N").count(), 3);

        let mut p = prompter("N\n");
        assert!(!p.confirm("Are you sure?").unwrap());
    }

    #[test]
    fn test_choose_overwrite_target() {
        let mut p = prompter("x\np\n");
        assert_eq!(p.choose_overwrite_target().unwrap(), OverwriteTarget::Phase);
        let out = output(p);
        assert!(out.contains("Enter one of the commands."));
        assert_eq!(out.matches("'H' - Max health").count(), 2);
    }
}
