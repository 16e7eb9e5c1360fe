use alloc::vec::Vec;
use core::str::FromStr;

use crate::player::PlayerId;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Standard fleet: one Battleship, two Submarines, three Destroyers, four Frigates.
pub const DEFAULT_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Random placement attempts allowed per ship before giving up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Ordered list of ship sizes placed for each player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetConfig {
    sizes: Vec<usize>,
    max_attempts: usize,
}

impl FleetConfig {
    pub fn new(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            max_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }

    /// Override the per-ship placement attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Number of board cells the fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.sizes.iter().sum()
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FLEET.to_vec())
    }
}

/// Who takes the first shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartingPlayer {
    Fixed(PlayerId),
    #[default]
    Random,
}

/// Machine opponent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniform random fire.
    #[default]
    Easy,
    /// Hunt/target fire that chases confirmed hits.
    Hard,
}

impl FromStr for Difficulty {
    type Err = core::convert::Infallible;

    /// Unrecognised input falls back to [`Difficulty::Easy`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("hard") {
            Ok(Difficulty::Hard)
        } else {
            Ok(Difficulty::Easy)
        }
    }
}
