//! Shared types: coordinates, shot outcomes and engine errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;
use crate::ship::ShipClass;

/// A grid position, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a coordinate, rejecting anything off the board.
    pub fn checked(row: usize, col: usize) -> Result<Self, EngineError> {
        let coord = Self { row, col };
        coord.validate()?;
        Ok(coord)
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.in_bounds() {
            Ok(())
        } else {
            Err(EngineError::InvalidCoordinate {
                row: self.row,
                col: self.col,
            })
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of resolving a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact cell of a ship.
    HitAndSunk(ShipClass),
}

impl ShotOutcome {
    /// `true` for both `Hit` and `HitAndSunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by engine operations. All are recoverable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate outside the board.
    InvalidCoordinate { row: usize, col: usize },
    /// The attacker already fired at this coordinate.
    RepeatedShot { row: usize, col: usize },
    /// Fleet configuration names a size with no ship class.
    UnknownShipSize(usize),
    /// Random placement exceeded its attempt cap.
    PlacementImpossible { size: usize, attempts: usize },
    /// Manual placement runs off the board.
    ShipOutOfBounds,
    /// Manual placement overlaps or touches another ship.
    ShipTouches,
    /// A game needs at least one ship per side.
    EmptyFleet,
    /// The game has already been decided.
    GameOver,
    /// Another player is due to shoot.
    NotYourTurn,
    /// Fleets cannot be re-placed once shots have been fired.
    GameInProgress,
    /// The player's shots come from outside the engine.
    ExternalInputRequired,
    /// Every cell has already been fired at.
    NoTargetsLeft,
}

impl From<BitBoardError> for EngineError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => {
                EngineError::InvalidCoordinate { row, col }
            }
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidCoordinate { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            EngineError::RepeatedShot { row, col } => {
                write!(f, "already fired at ({}, {})", row, col)
            }
            EngineError::UnknownShipSize(size) => {
                write!(f, "no ship class has size {}", size)
            }
            EngineError::PlacementImpossible { size, attempts } => write!(
                f,
                "could not place ship of size {} after {} attempts",
                size, attempts
            ),
            EngineError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            EngineError::ShipTouches => write!(f, "ship placement touches another ship"),
            EngineError::EmptyFleet => write!(f, "a fleet has no ships"),
            EngineError::GameOver => write!(f, "game is already over"),
            EngineError::NotYourTurn => write!(f, "it is the other player's turn"),
            EngineError::GameInProgress => write!(f, "shots have already been fired"),
            EngineError::ExternalInputRequired => {
                write!(f, "player is controlled by external input")
            }
            EngineError::NoTargetsLeft => write!(f, "no unfired cells remain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
