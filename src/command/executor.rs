//! Command execution - gathers a command's answers, then applies it
//!
//! Each command asks for everything it needs before touching the
//! session, so an abort mid-command never leaves a character half-changed.

use crate::character::{Character, HealOutcome};
use crate::command::input::Prompter;
use crate::command::parser::{Command, OverwriteTarget};
use crate::core::angle::{deg_to_rad, from_polar_degrees, round_to};
use crate::core::config::SummaryFormat;
use crate::core::error::Result;
use crate::render::{Diagram, DiagramSnapshot};
use crate::session::summary::{format_global, format_global_json, format_local, summarize};
use crate::session::Session;
use std::io::{BufRead, Write};

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Executes commands against a session
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn execute<R: BufRead, W: Write>(
        session: &mut Session,
        prompter: &mut Prompter<R, W>,
        command: Command,
    ) -> Result<Flow> {
        tracing::debug!("Executing {:?}", command);
        match command {
            Command::Help => print_help(prompter)?,
            Command::Quit => return confirm_quit(prompter),
            Command::Add => add_character(session, prompter)?,
            Command::LocalSummary => local_summary(session, prompter)?,
            Command::GlobalSummary => global_summary(session, prompter)?,
            Command::ShowDiagram => show_diagram(session, prompter)?,
            Command::Damage => damage(session, prompter)?,
            Command::Heal => heal(session, prompter)?,
            Command::PhaseShift => phase_shift(session, prompter)?,
            Command::Overwrite => overwrite(session, prompter)?,
        }
        Ok(Flow::Continue)
    }
}

/// Print the command menu
pub fn print_help<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    prompter.say("--HELP MENU--")?;
    prompter.say("Character tracker is used for health in the complex domain.")?;
    prompter.say("Enter arguments one line at a time, or after the command key")?;
    prompter.say("separated by spaces (quote names that contain spaces).")?;
    prompter.say("")?;
    prompter.say("'~' - Input at any time to immediately abort and return to the command loop.")?;

    let groups: [&[Command]; 4] = [
        &[Command::Help, Command::Quit],
        &[Command::Add, Command::LocalSummary, Command::GlobalSummary],
        &[
            Command::ShowDiagram,
            Command::Damage,
            Command::Heal,
            Command::PhaseShift,
        ],
        &[Command::Overwrite],
    ];
    for group in groups {
        prompter.say("")?;
        for command in group {
            prompter.say(format!("'{}' - {}", command.key(), command.description()))?;
        }
    }
    Ok(())
}

/// Print the global summary in the configured format
pub fn global_summary<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let summaries = session.summaries();
    match session.config().summary_format {
        SummaryFormat::Text => prompter.say(format_global(&summaries).trim_end())?,
        SummaryFormat::Json => prompter.say(format_global_json(&summaries)?)?,
    }
    Ok(())
}

fn confirm_quit<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Flow> {
    if prompter.confirm("Are you sure?")? && prompter.confirm("Are you REALLY sure?")? {
        prompter.say("Ok bye")?;
        return Ok(Flow::Quit);
    }
    Ok(Flow::Continue)
}

fn add_character<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("--ADD CHARACTER--")?;
    let name = prompter.scan_name(session)?;
    let max_health = prompter.scan_positive("Enter max hitpoints:")?;
    let initiative = prompter.scan_positive("Enter initiative:")?;

    let added = session.add(Character::new(name, max_health, initiative))?;
    let message = format!("{} added!", added.name());
    prompter.say(message)
}

fn local_summary<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("--LOCAL SUMMARY--")?;
    let name = prompter.select_character(session)?;
    let summary = summarize(session.get(&name)?, session.config().display_digits);
    prompter.say(format_local(&summary).trim_end())
}

fn show_diagram<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let name = prompter.select_character(session)?;
    let snapshot = DiagramSnapshot::from_character(session.get(&name)?);
    let config = &session.config().diagram;

    prompter.say(format!("Diagram for {}", snapshot.name))?;
    let diagram = Diagram::rasterize(&snapshot, config);
    diagram.write_to(prompter.writer(), config.color)?;
    Ok(())
}

fn damage<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let name = prompter.select_character(session)?;
    let magnitude = prompter.scan_positive("Enter value of damage taken")?;
    let degrees = prompter.scan_integer("Enter argument of damage taken (degrees)")?;

    let vector = from_polar_degrees(magnitude.get() as f64, degrees as f64);
    session.get_mut(&name)?.take_damage(vector);
    prompter.say(format!("{} damaged by {}∠{}", name, magnitude, degrees))
}

fn heal<R: BufRead, W: Write>(session: &mut Session, prompter: &mut Prompter<R, W>) -> Result<()> {
    let name = prompter.select_character(session)?;
    let magnitude = prompter.scan_positive("Enter value of healing received")?;
    let degrees = prompter.scan_integer("Enter argument of healing received (degrees)")?;

    let vector = from_polar_degrees(magnitude.get() as f64, degrees as f64);
    let digits = session.config().display_digits;
    let message = match session.get_mut(&name)?.take_heal(vector) {
        HealOutcome::Overhealed { excess } => {
            format!("{} overhealed by {}.", name, round_to(excess, digits))
        }
        HealOutcome::Healed { amount } => {
            format!("Healed {} by {}∠{}", name, round_to(amount, digits), degrees)
        }
    };
    prompter.say(message)
}

fn phase_shift<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let name = prompter.select_character(session)?;
    let degrees = prompter.scan_integer("Enter phase shift argument (degrees)")?;

    let policy = session.config().phase_policy;
    session
        .get_mut(&name)?
        .shift_phase_with(deg_to_rad(degrees as f64), policy);
    prompter.say(format!("{}'s phase shifted by {}", name, degrees))
}

fn overwrite<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("--OVERWRITE--")?;
    let name = prompter.select_character(session)?;
    let target = prompter.choose_overwrite_target()?;
    let policy = session.config().phase_policy;

    let message = match target {
        OverwriteTarget::MaxHealth => {
            let value = prompter.scan_positive("Enter new max hp:")?;
            session.get_mut(&name)?.overwrite_max_health(value);
            "Max health overwritten."
        }
        OverwriteTarget::Health => {
            let value = prompter.scan_positive("Enter new hp:")?;
            session.get_mut(&name)?.overwrite_health(value);
            "Health overwritten."
        }
        OverwriteTarget::Phase => {
            let degrees = prompter.scan_integer("Enter new phase shift (degrees):")?;
            session
                .get_mut(&name)?
                .overwrite_phase_with(degrees as f64, policy);
            "Phase overwritten."
        }
        OverwriteTarget::Initiative => {
            let value = prompter.scan_positive("Enter new initiative:")?;
            session.get_mut(&name)?.overwrite_initiative(value);
            "Initiative overwritten."
        }
    };
    prompter.say(message)
}
