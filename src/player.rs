use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::bitboard::CellMask;
use crate::board::Board;
use crate::common::{Coord, EngineError};
use crate::config::FleetConfig;
use crate::placement;
use crate::ship::{Fleet, Orientation};
use crate::targeting::TargetingStrategy;

/// Seat at the table. `One` is conventionally the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Where a player's shots come from.
pub enum Controller {
    /// Coordinates are supplied by an outside collaborator via `submit_shot`.
    HumanInput,
    /// The engine asks the strategy for each shot.
    Machine(Box<dyn TargetingStrategy>),
}

impl Controller {
    pub fn is_human(&self) -> bool {
        matches!(self, Controller::HumanInput)
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controller::HumanInput => write!(f, "HumanInput"),
            Controller::Machine(s) => write!(f, "Machine({})", s.name()),
        }
    }
}

/// One side of the game: fleet, own board, and a record of its own shots.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    pub(crate) controller: Controller,
    pub(crate) fleet: Fleet,
    pub(crate) board: Board,
    pub(crate) shots: Board,
    pub(crate) fired: Vec<Coord>,
    pub(crate) fired_mask: CellMask,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, controller: Controller) -> Self {
        Self {
            id,
            name: name.into(),
            controller,
            fleet: Fleet::new(),
            board: Board::new(),
            shots: Board::new(),
            fired: Vec::new(),
            fired_mask: CellMask::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// This player's own board: ships plus the opponent's hits and misses.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Outcomes of the shots this player has fired.
    pub fn shots_board(&self) -> &Board {
        &self.shots
    }

    /// Every coordinate this player has fired at, oldest first.
    pub fn shots_fired(&self) -> &[Coord] {
        &self.fired
    }

    pub fn fired_mask(&self) -> &CellMask {
        &self.fired_mask
    }

    pub fn has_fired_at(&self, coord: Coord) -> bool {
        self.fired_mask.get(coord.row, coord.col).unwrap_or(false)
    }

    pub fn is_defeated(&self) -> bool {
        self.fleet.is_defeated()
    }

    /// Clear board and fleet and place a fresh random fleet.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        config: &FleetConfig,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        placement::place_fleet(&mut self.board, &mut self.fleet, config, rng)
    }

    /// Place a single ship at a fixed position on top of the current fleet.
    pub fn place_ship(
        &mut self,
        size: usize,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), EngineError> {
        placement::place_ship(&mut self.board, &mut self.fleet, size, origin, orientation)
    }

    /// Remove every ship from the board and fleet.
    pub fn clear_fleet(&mut self) {
        self.board.reset();
        self.fleet.clear();
    }
}
