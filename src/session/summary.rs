//! Display summaries of character state
//!
//! All display math (rounding, polar notation, danger arc in degrees)
//! happens once in [`summarize`]. The local and global views only format
//! the resulting [`CharacterSummary`].

use crate::character::Character;
use crate::core::angle::{rad_to_deg, round_to, round_vector};
use crate::core::error::Result;
use serde::Serialize;
use std::fmt::Write;

/// Display-ready snapshot of one character, rounded for output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterSummary {
    pub name: String,
    pub initiative: u32,
    /// Rectangular health `[real, imaginary]`
    pub health: [f64; 2],
    pub magnitude: f64,
    pub max_health: u32,
    /// Health argument in degrees, [0, 360)
    pub argument: f64,
    /// Phase in degrees
    pub phase: f64,
    /// Danger arc bounds in degrees, lower first
    pub danger_arc: [f64; 2],
}

/// Compute the display values for a character
pub fn summarize(character: &Character, digits: u32) -> CharacterSummary {
    let health = round_vector(character.health(), digits);
    let (lower, upper) = character.danger_arc().to_degrees();

    CharacterSummary {
        name: character.name().to_string(),
        initiative: character.initiative().get(),
        health: [health.x, health.y],
        magnitude: round_to(character.magnitude(), digits),
        max_health: character.max_health().get(),
        argument: round_to(rad_to_deg(character.polar_argument()), digits),
        phase: round_to(rad_to_deg(character.phase()), digits),
        danger_arc: [round_to(lower, digits), round_to(upper, digits)],
    }
}

impl CharacterSummary {
    /// Health in polar notation, e.g. `70∠45`
    pub fn polar_notation(&self) -> String {
        format!("{}∠{}", self.magnitude, self.argument)
    }

    /// Health in rectangular notation, e.g. `70+12.5i`
    pub fn rectangular_notation(&self) -> String {
        let [re, im] = self.health;
        if im < 0.0 {
            format!("{}-{}i", re, -im)
        } else {
            format!("{}+{}i", re, im)
        }
    }

    pub fn danger_line(&self) -> String {
        format!(
            "Danger argument = {} <= DEATH <= {}",
            self.danger_arc[0], self.danger_arc[1]
        )
    }
}

/// Full detail view for a single character
pub fn format_local(summary: &CharacterSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary for {}", summary.name);
    let _ = writeln!(out, "Hitpoints: {}", summary.rectangular_notation());
    let _ = writeln!(out, "Initiative: {}", summary.initiative);
    let _ = writeln!(
        out,
        "Hitpoint value: {}/{}",
        summary.magnitude, summary.max_health
    );
    let _ = writeln!(out, "Phase shift: {}", summary.phase);
    let _ = writeln!(out, "{}", summary.danger_line());
    let _ = writeln!(out, "Polar health: {}", summary.polar_notation());
    out
}

/// Condensed view of every character, in the order given
pub fn format_global(summaries: &[CharacterSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "----GLOBAL SUMMARY----");
    for summary in summaries {
        let _ = writeln!(out, "Summary for {}", summary.name);
        let _ = writeln!(out, "Initiative: {}", summary.initiative);
        let _ = writeln!(out, "Phase shift: {}", summary.phase);
        let _ = writeln!(out, "{}", summary.danger_line());
        let _ = writeln!(out, "Polar health: {}", summary.polar_notation());
        let _ = writeln!(out, "----------------------");
    }
    out
}

/// Global summary as pretty-printed JSON
pub fn format_global_json(summaries: &[CharacterSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::angle::from_polar_degrees;
    use std::num::NonZeroU32;

    fn hero() -> Character {
        Character::new(
            "Hero",
            NonZeroU32::new(100).unwrap(),
            NonZeroU32::new(5).unwrap(),
        )
    }

    #[test]
    fn test_summary_of_fresh_character() {
        let summary = summarize(&hero(), 2);
        assert_eq!(summary.health, [100.0, 0.0]);
        assert_eq!(summary.magnitude, 100.0);
        assert_eq!(summary.argument, 0.0);
        assert_eq!(summary.phase, 0.0);
        assert_eq!(summary.danger_arc, [135.0, 225.0]);
        assert_eq!(summary.polar_notation(), "100∠0");
        assert_eq!(summary.rectangular_notation(), "100+0i");
    }

    #[test]
    fn test_argument_is_reported_in_positive_degrees() {
        let mut c = hero();
        c.shift_phase(-std::f64::consts::FRAC_PI_2);
        let summary = summarize(&c, 2);
        assert_eq!(summary.argument, 270.0);
        assert_eq!(summary.rectangular_notation(), "0-100i");
    }

    #[test]
    fn test_rounding_digits() {
        let mut c = hero();
        c.take_damage(from_polar_degrees(1.0 / 3.0, 0.0));
        assert_eq!(summarize(&c, 2).magnitude, 99.67);
        assert_eq!(summarize(&c, 0).magnitude, 100.0);
        assert_eq!(summarize(&c, 4).magnitude, 99.6667);
    }

    #[test]
    fn test_local_format() {
        let mut c = hero();
        c.take_damage(from_polar_degrees(30.0, 0.0));
        let text = format_local(&summarize(&c, 2));

        assert!(text.contains("Summary for Hero"));
        assert!(text.contains("Hitpoint value: 70/100"));
        assert!(text.contains("Initiative: 5"));
        assert!(text.contains("Danger argument = 135 <= DEATH <= 225"));
        assert!(text.contains("Polar health: 70∠0"));
    }

    #[test]
    fn test_global_format_lists_everyone() {
        let a = summarize(&hero(), 2);
        let mut b = a.clone();
        b.name = "Sidekick".to_string();

        let text = format_global(&[a, b]);
        assert!(text.starts_with("----GLOBAL SUMMARY----"));
        assert_eq!(text.matches("Summary for").count(), 2);
        assert!(text.find("Hero").unwrap() < text.find("Sidekick").unwrap());
    }

    #[test]
    fn test_global_json() {
        let json = format_global_json(&[summarize(&hero(), 2)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Hero");
        assert_eq!(value[0]["max_health"], 100);
        assert_eq!(value[0]["danger_arc"][1], 225.0);
    }
}
