//! Applies one shot from an attacker to a defender.

use log::{debug, info};

use crate::board::Cell;
use crate::common::{Coord, EngineError, ShotOutcome};
use crate::player::Player;

/// Resolve `coord` fired by `attacker` against `defender`.
///
/// Out-of-range and repeated coordinates are rejected before any state
/// changes. Otherwise the coordinate is appended to the attacker's history, the
/// struck ship (if any) records the hit, and the cell is marked on both the
/// attacker's shots board and the defender's own board.
pub fn resolve_shot(
    attacker: &mut Player,
    defender: &mut Player,
    coord: Coord,
) -> Result<ShotOutcome, EngineError> {
    coord.validate()?;
    if attacker.has_fired_at(coord) {
        return Err(EngineError::RepeatedShot {
            row: coord.row,
            col: coord.col,
        });
    }

    attacker.fired.push(coord);
    attacker.fired_mask.set(coord.row, coord.col)?;

    let outcome = match defender.fleet.ship_at_mut(coord) {
        Some(ship) => {
            ship.register_hit(coord);
            if ship.is_sunk() {
                ShotOutcome::HitAndSunk(ship.class())
            } else {
                ShotOutcome::Hit
            }
        }
        None => ShotOutcome::Miss,
    };
    if let ShotOutcome::HitAndSunk(class) = outcome {
        info!("{} sank {}'s {}", attacker.name(), defender.name(), class);
    }

    let mark = if outcome.is_hit() { Cell::Hit } else { Cell::Miss };
    attacker.shots.set_cell(coord.row, coord.col, mark)?;
    defender.board.set_cell(coord.row, coord.col, mark)?;

    debug!("{} fired at {}: {:?}", attacker.name(), coord, outcome);
    Ok(outcome)
}
