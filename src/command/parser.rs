//! Parsing of command lines and prompt answers
//!
//! A command line is a single command key optionally followed by
//! arguments, e.g. `d Marcus 30 45` or `a "Sir Robin" 40 12`. Arguments
//! answer the command's prompts in order.

use nom::branch::alt;
use nom::bytes::complete::{is_not, take_while};
use nom::character::complete::{char, i64 as integer, multispace0, multispace1};
use nom::combinator::all_consuming;
use nom::multi::separated_list0;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use std::num::NonZeroU32;

/// Answer that aborts the current command at any prompt
pub const ABORT_TOKEN: &str = "~";

pub const CONFIRM_YES: &str = "Y";
pub const CONFIRM_NO: &str = "N";

/// Top-level commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Add,
    LocalSummary,
    GlobalSummary,
    ShowDiagram,
    Damage,
    Heal,
    PhaseShift,
    Overwrite,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::Help,
        Command::Quit,
        Command::Add,
        Command::LocalSummary,
        Command::GlobalSummary,
        Command::ShowDiagram,
        Command::Damage,
        Command::Heal,
        Command::PhaseShift,
        Command::Overwrite,
    ];

    pub fn key(&self) -> char {
        match self {
            Command::Help => '?',
            Command::Quit => 'q',
            Command::Add => 'a',
            Command::LocalSummary => 's',
            Command::GlobalSummary => 'S',
            Command::ShowDiagram => '!',
            Command::Damage => 'd',
            Command::Heal => 'h',
            Command::PhaseShift => 'r',
            Command::Overwrite => 'o',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Print this help menu.",
            Command::Quit => "Quit the program.",
            Command::Add => "Add a character.",
            Command::LocalSummary => "Print all details for one character.",
            Command::GlobalSummary => "Print summaries for all characters.",
            Command::ShowDiagram => "Display a visual representation of one character.",
            Command::Damage => "Damage a character.",
            Command::Heal => "Heal a character.",
            Command::PhaseShift => "Rotate a character's phase shift.",
            Command::Overwrite => "Overwrite a certain stat.",
        }
    }

    pub fn from_key(key: &str) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|command| key.len() == 1 && key.starts_with(command.key()))
    }
}

/// Stats the overwrite command can set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteTarget {
    MaxHealth,
    Health,
    Phase,
    Initiative,
}

impl OverwriteTarget {
    pub const ALL: [OverwriteTarget; 4] = [
        OverwriteTarget::MaxHealth,
        OverwriteTarget::Health,
        OverwriteTarget::Phase,
        OverwriteTarget::Initiative,
    ];

    pub fn key(&self) -> char {
        match self {
            OverwriteTarget::MaxHealth => 'H',
            OverwriteTarget::Health => 'h',
            OverwriteTarget::Phase => 'p',
            OverwriteTarget::Initiative => 'i',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OverwriteTarget::MaxHealth => "Max health",
            OverwriteTarget::Health => "Health",
            OverwriteTarget::Phase => "Phase",
            OverwriteTarget::Initiative => "Initiative",
        }
    }

    pub fn from_key(key: &str) -> Option<OverwriteTarget> {
        OverwriteTarget::ALL
            .into_iter()
            .find(|target| key.len() == 1 && key.starts_with(target.key()))
    }
}

/// A command with its prefilled prompt answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub command: Command,
    pub args: Vec<String>,
}

fn token(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        is_not(" \t\r\n"),
    ))
    .parse(input)
}

fn token_list(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(multispace0, separated_list0(multispace1, token), multispace0).parse(input)
}

/// Split a line into whitespace-separated tokens. Double quotes group
/// words into one token.
pub fn tokenize(line: &str) -> Vec<String> {
    match all_consuming(token_list).parse(line) {
        Ok((_, tokens)) => tokens.into_iter().map(str::to_string).collect(),
        // Only reachable for stray quotes glued to whitespace; fall back
        // to plain splitting
        Err(_) => line.split_whitespace().map(str::to_string).collect(),
    }
}

/// Parse a command line. `Ok(None)` for a blank line, `Err` with the
/// offending key when the first token is not a command.
pub fn parse_command_line(line: &str) -> Result<Option<CommandLine>, String> {
    let mut tokens = tokenize(line).into_iter();
    let Some(key) = tokens.next() else {
        return Ok(None);
    };

    match Command::from_key(&key) {
        Some(command) => Ok(Some(CommandLine {
            command,
            args: tokens.collect(),
        })),
        None => Err(key),
    }
}

fn padded_integer(input: &str) -> IResult<&str, i64> {
    delimited(multispace0, integer, multispace0).parse(input)
}

/// Parse a signed integer, allowing surrounding whitespace
pub fn parse_integer(input: &str) -> Option<i64> {
    all_consuming(padded_integer)
        .parse(input)
        .ok()
        .map(|(_, value)| value)
}

/// Parse a positive, non-zero integer that fits in a `u32`
pub fn parse_positive(input: &str) -> Option<NonZeroU32> {
    parse_integer(input)
        .and_then(|value| u32::try_from(value).ok())
        .and_then(NonZeroU32::new)
}
