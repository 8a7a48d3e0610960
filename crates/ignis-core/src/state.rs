//! The per-cell fire state machine.

use crate::error::CoreError;
use std::fmt;

/// Fire state of a single landscape cell.
///
/// The automaton only ever moves a cell forward along
/// `Fuel -> Burning -> Burned`; `NonFuel` cells never change.
/// Discriminant values are the wire encoding used by burn maps and test
/// fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellState {
    /// Nothing combustible here (water, rock, cleared ground).
    NonFuel = 0,
    /// Combustible vegetation that has not ignited.
    Fuel = 1,
    /// Actively burning during the current tick.
    Burning = 2,
    /// Fuel exhausted; cannot reignite.
    Burned = 3,
}

impl CellState {
    /// True when fire has reached this cell, now or earlier.
    ///
    /// This is the per-cell burn indicator the Monte Carlo estimator
    /// averages: `Burning` and `Burned` both count as burned.
    pub fn has_burned(self) -> bool {
        matches!(self, Self::Burning | Self::Burned)
    }

    /// True when the cell could ignite on a future tick.
    pub fn is_fuel(self) -> bool {
        self == Self::Fuel
    }

    /// Decode a raw discriminant.
    pub fn from_u8(value: u8) -> Result<Self, CoreError> {
        match value {
            0 => Ok(Self::NonFuel),
            1 => Ok(Self::Fuel),
            2 => Ok(Self::Burning),
            3 => Ok(Self::Burned),
            _ => Err(CoreError::InvalidCellState { value }),
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Fuel
    }
}

impl From<CellState> for u8 {
    fn from(s: CellState) -> Self {
        s as u8
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NonFuel => "non-fuel",
            Self::Fuel => "fuel",
            Self::Burning => "burning",
            Self::Burned => "burned",
        };
        write!(f, "{name}")
    }
}
