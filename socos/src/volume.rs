//! Relative volume arithmetic for the `volume +N` / `volume -N` command.

use soco::SpeakerControl;

use crate::error::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A parsed volume operator token: a direction plus an adjustment factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeDelta {
    pub direction: Direction,
    pub factor: u32,
}

impl VolumeDelta {
    /// Parse an operator token such as `+`, `-`, `+10` or `-3`.
    ///
    /// The leading character picks the direction; the remainder, if any, is
    /// the factor (default 1).
    pub fn parse(token: &str) -> Result<Self, CommandError> {
        let direction = match token.chars().next() {
            Some('+') => Direction::Up,
            Some('-') => Direction::Down,
            _ => return Err(CommandError::InvalidOperator),
        };

        let rest = &token[1..];
        let factor = if rest.is_empty() {
            1
        } else {
            rest.parse::<u32>().map_err(|_| CommandError::InvalidFactor)?
        };

        Ok(Self { direction, factor })
    }

    /// Apply the delta to a current level.
    ///
    /// A factor that would push the level past 100 or below 0 is retried as
    /// a single step in the same direction rather than clamped to the
    /// boundary, so `apply(50)` of `+60` is 51, not 100. A retry that still
    /// lands outside 0..=100 is clamped to keep the level representable.
    pub fn apply(&self, current: u8) -> u8 {
        let current = i64::from(current);
        let factor = i64::from(self.factor);

        let candidate = match self.direction {
            Direction::Up => {
                let factor = if current + factor > 100 { 1 } else { factor };
                current + factor
            }
            Direction::Down => {
                let factor = if current - factor < 0 { 1 } else { factor };
                current - factor
            }
        };

        candidate.clamp(0, 100) as u8
    }
}

/// Read the speaker's volume, apply the operator token, and set the result.
///
/// The token is validated before any call is issued; nothing is mutated on
/// an error path.
pub fn adjust(speaker: &dyn SpeakerControl, token: &str) -> Result<u8, CommandError> {
    let delta = VolumeDelta::parse(token)?;
    let current = speaker.get_volume()?;
    Ok(speaker.set_volume(delta.apply(current))?)
}
