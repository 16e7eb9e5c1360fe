//! Fleet placement with the no-touch rule: ships may not share or border a
//! cell, diagonals included.

use log::{debug, warn};
use rand::Rng;

use crate::bitboard::CellMask;
use crate::board::{Board, Cell};
use crate::common::{Coord, EngineError};
use crate::config::{FleetConfig, BOARD_SIZE};
use crate::ship::{span, Fleet, Orientation, Ship, ShipClass};

/// `true` if a ship of `size` at `origin` stays clear of every ship already on
/// `board`, including the ring of cells around it.
pub fn fits_without_contact(
    board: &Board,
    origin: Coord,
    orientation: Orientation,
    size: usize,
) -> Result<bool, EngineError> {
    let footprint = CellMask::from_cells(span(origin, orientation, size).map(|c| (c.row, c.col)))
        .map_err(|_| EngineError::ShipOutOfBounds)?;
    Ok((footprint.dilate() & board.ship_mask()).is_empty())
}

/// Draws random `(origin, orientation)` pairs for a ship of `size` until one
/// fits, or fails after `max_attempts` draws.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    size: usize,
    max_attempts: usize,
) -> Result<(Coord, Orientation), EngineError> {
    if size == 0 || size > BOARD_SIZE {
        return Err(EngineError::UnknownShipSize(size));
    }
    for attempt in 1..=max_attempts {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        // anchor range keeps the whole ship on the board
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - size),
            Orientation::Vertical => (BOARD_SIZE - size, BOARD_SIZE - 1),
        };
        let origin = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
        if fits_without_contact(board, origin, orientation, size)? {
            debug!(
                "placed size {} at {} {:?} after {} attempt(s)",
                size, origin, orientation, attempt
            );
            return Ok((origin, orientation));
        }
    }
    Err(EngineError::PlacementImpossible {
        size,
        attempts: max_attempts,
    })
}

/// Place one ship at a fixed position, marking the board and registering it in
/// the fleet.
pub fn place_ship(
    board: &mut Board,
    fleet: &mut Fleet,
    size: usize,
    origin: Coord,
    orientation: Orientation,
) -> Result<(), EngineError> {
    let class = ShipClass::from_size(size)?;
    let ship = Ship::new(class, origin, orientation)?;
    if !fits_without_contact(board, origin, orientation, size)? {
        return Err(EngineError::ShipTouches);
    }
    for cell in ship.cells() {
        board.set_cell(cell.row, cell.col, Cell::Ship)?;
    }
    fleet.push(ship);
    Ok(())
}

/// Reset `board` and `fleet`, then place every ship in `config` at random.
///
/// Sizes are validated before anything is touched. If a ship cannot be placed
/// within the attempt cap, board and fleet are left empty.
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &mut Fleet,
    config: &FleetConfig,
    rng: &mut R,
) -> Result<(), EngineError> {
    for &size in config.sizes() {
        ShipClass::from_size(size)?;
    }
    board.reset();
    fleet.clear();
    for &size in config.sizes() {
        let placed = random_placement(board, rng, size, config.max_attempts())
            .and_then(|(origin, orientation)| place_ship(board, fleet, size, origin, orientation));
        if let Err(err) = placed {
            warn!("fleet placement failed: {}", err);
            board.reset();
            fleet.clear();
            return Err(err);
        }
    }
    Ok(())
}
