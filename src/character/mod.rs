//! Character state on the complex plane
//!
//! A character's hit points are a vector: the magnitude is the hit-point
//! value and the argument is a direction built up by the damage and heal
//! history. `phase` is a separate angle that only moves through phase
//! shifts, which also rotate the health vector by the same amount.
//!
//! Invariants held after every mutating call:
//! - `|health| <= max_health`
//! - `phase` lies within [0, 2π]

use crate::core::angle::{
    argument, deg_to_rad, from_polar, normalize_principal, rad_to_deg, wrap_angle,
};
use crate::core::config::PhasePolicy;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_4, TAU};
use std::num::NonZeroU32;

/// Offset of each danger arc bound from the current phase
pub const DANGER_ARC_OFFSET: f64 = 3.0 * FRAC_PI_4;

/// A tracked character
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    name: String,
    health: DVec2,
    max_health: NonZeroU32,
    phase: f64,
    initiative: NonZeroU32,
}

/// What a heal did, for the caller to report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealOutcome {
    /// The whole heal fit under the ceiling
    Healed { amount: f64 },
    /// The heal overshot the ceiling by `excess` and was clamped
    Overhealed { excess: f64 },
}

/// Angular window opposite the phase, in radians with `lower <= upper`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DangerArc {
    pub lower: f64,
    pub upper: f64,
}

impl DangerArc {
    /// Both bounds in degrees
    pub fn to_degrees(self) -> (f64, f64) {
        (rad_to_deg(self.lower), rad_to_deg(self.upper))
    }
}

impl Character {
    /// Create a character at full health with zero argument and zero phase
    pub fn new(name: impl Into<String>, max_health: NonZeroU32, initiative: NonZeroU32) -> Self {
        Self {
            name: name.into(),
            health: DVec2::new(max_health.get() as f64, 0.0),
            max_health,
            phase: 0.0,
            initiative,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health as a complex number (x = real, y = imaginary)
    pub fn health(&self) -> DVec2 {
        self.health
    }

    pub fn max_health(&self) -> NonZeroU32 {
        self.max_health
    }

    /// Phase in radians
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn initiative(&self) -> NonZeroU32 {
        self.initiative
    }

    /// Hit-point value, `|health|`
    pub fn magnitude(&self) -> f64 {
        self.health.length()
    }

    /// Argument of the health vector in (-π, π]
    pub fn argument(&self) -> f64 {
        argument(self.health)
    }

    /// Argument of the health vector in [0, 2π)
    pub fn polar_argument(&self) -> f64 {
        normalize_principal(self.argument())
    }

    /// Subtract a damage vector, then clamp to the ceiling
    pub fn take_damage(&mut self, damage: DVec2) {
        self.health -= damage;
        self.clamp_health();
        tracing::debug!(
            "{} damaged by {:?}, now {:.2} / {}",
            self.name,
            damage,
            self.magnitude(),
            self.max_health
        );
    }

    /// Add a heal vector, then clamp to the ceiling
    pub fn take_heal(&mut self, heal: DVec2) -> HealOutcome {
        self.health += heal;

        let value = self.magnitude();
        let ceiling = self.max_health.get() as f64;
        let outcome = if value > ceiling {
            HealOutcome::Overhealed {
                excess: value - ceiling,
            }
        } else {
            HealOutcome::Healed {
                amount: heal.length(),
            }
        };

        self.clamp_health();
        tracing::debug!("{} healed: {:?}", self.name, outcome);
        outcome
    }

    /// Rotate health and phase together by `delta` radians, saturating the phase
    pub fn shift_phase(&mut self, delta: f64) {
        self.shift_phase_with(delta, PhasePolicy::Saturate);
    }

    /// Rotate health and phase together by `delta` radians.
    ///
    /// Rotation never changes `|health|`, so no reclamp happens here.
    pub fn shift_phase_with(&mut self, delta: f64, policy: PhasePolicy) {
        self.health = DVec2::from_angle(delta).rotate(self.health);
        self.phase += delta;
        self.phase = match policy {
            PhasePolicy::Saturate => self.phase.clamp(0.0, TAU),
            PhasePolicy::Wrap => wrap_angle(self.phase),
        };
        tracing::debug!(
            "{} phase shifted by {:.4} rad, phase now {:.4}",
            self.name,
            delta,
            self.phase
        );
    }

    /// Set a new health ceiling and clamp health to it
    pub fn overwrite_max_health(&mut self, max_health: NonZeroU32) {
        self.max_health = max_health;
        self.clamp_health();
    }

    /// Set `|health|` keeping its argument, then clamp to the ceiling
    pub fn overwrite_health(&mut self, magnitude: NonZeroU32) {
        self.health = from_polar(magnitude.get() as f64, self.argument());
        self.clamp_health();
    }

    /// Set an absolute phase in degrees, saturating
    pub fn overwrite_phase(&mut self, degrees: f64) {
        self.overwrite_phase_with(degrees, PhasePolicy::Saturate);
    }

    /// Set an absolute phase in degrees.
    ///
    /// Implemented as a shift by the difference from the current phase,
    /// so the health vector turns along with it.
    pub fn overwrite_phase_with(&mut self, degrees: f64, policy: PhasePolicy) {
        let difference = deg_to_rad(degrees) - self.phase;
        self.shift_phase_with(difference, policy);
    }

    pub fn overwrite_initiative(&mut self, initiative: NonZeroU32) {
        self.initiative = initiative;
    }

    /// Window of width π/2 sitting diametrically opposite the phase.
    ///
    /// Each bound is corrected on one side only, so both lie in [0, 2π]
    /// and a bound landing exactly on 2π stays there.
    pub fn danger_arc(&self) -> DangerArc {
        let mut a = self.phase + DANGER_ARC_OFFSET;
        let mut b = self.phase - DANGER_ARC_OFFSET;
        if a > TAU {
            a -= TAU;
        }
        if b < 0.0 {
            b += TAU;
        }

        if a > b {
            DangerArc { lower: b, upper: a }
        } else {
            DangerArc { lower: a, upper: b }
        }
    }

    fn clamp_health(&mut self) {
        self.health = self.health.clamp_length_max(self.max_health.get() as f64);
    }
}
