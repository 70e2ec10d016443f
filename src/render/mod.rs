//! Terminal diagram of a character on the complex plane
//!
//! Draws the health ceiling as a circle, the phase as a radial line, the
//! danger sector opposite the phase and a marker at the current health.
//! This module is READ-ONLY - it never modifies character state.

pub mod colors;
pub mod diagram;

use crate::character::Character;
use glam::DVec2;

pub use diagram::{Cell, Diagram};

/// Lightweight snapshot of a character for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSnapshot {
    pub name: String,
    pub max_health: f64,
    pub phase: f64,
    pub health: DVec2,
}

impl DiagramSnapshot {
    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name().to_string(),
            max_health: character.max_health().get() as f64,
            phase: character.phase(),
            health: character.health(),
        }
    }
}
