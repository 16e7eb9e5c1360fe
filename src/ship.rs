//! Ships, their classes, and the fleet that owns them.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coord, EngineError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Ship class, derived from the ship's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Frigate,
    Destroyer,
    Submarine,
    Battleship,
}

impl ShipClass {
    pub fn from_size(size: usize) -> Result<Self, EngineError> {
        match size {
            1 => Ok(ShipClass::Frigate),
            2 => Ok(ShipClass::Destroyer),
            3 => Ok(ShipClass::Submarine),
            4 => Ok(ShipClass::Battleship),
            other => Err(EngineError::UnknownShipSize(other)),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            ShipClass::Frigate => 1,
            ShipClass::Destroyer => 2,
            ShipClass::Submarine => 3,
            ShipClass::Battleship => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShipClass::Frigate => "Frigate",
            ShipClass::Destroyer => "Destroyer",
            ShipClass::Submarine => "Submarine",
            ShipClass::Battleship => "Battleship",
        }
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cells covered by a ship of `size` anchored at `origin`, in placement order.
/// Does not check bounds.
pub(crate) fn span(origin: Coord, orientation: Orientation, size: usize) -> impl Iterator<Item = Coord> {
    (0..size).map(move |i| match orientation {
        Orientation::Horizontal => Coord::new(origin.row, origin.col + i),
        Orientation::Vertical => Coord::new(origin.row + i, origin.col),
    })
}

/// A placed ship. Its cells never change; only the hit flags do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    cells: Vec<Coord>,
    hits: Vec<bool>,
}

impl Ship {
    /// Build a ship of `class` starting at `origin`. Fails with `ShipOutOfBounds`
    /// if any cell would leave the board.
    pub fn new(class: ShipClass, origin: Coord, orientation: Orientation) -> Result<Self, EngineError> {
        let cells: Vec<Coord> = span(origin, orientation, class.size()).collect();
        if cells.iter().any(|c| !c.in_bounds()) {
            return Err(EngineError::ShipOutOfBounds);
        }
        let hits = alloc::vec![false; cells.len()];
        Ok(Self {
            class,
            orientation,
            cells,
            hits,
        })
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn type_name(&self) -> &'static str {
        self.class.name()
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Hit flags, parallel to [`Ship::cells`].
    pub fn hits(&self) -> &[bool] {
        &self.hits
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Flag the segment at `coord` as hit. Returns `false` if the ship does not
    /// cover `coord`.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        match self.cells.iter().position(|&c| c == coord) {
            Some(idx) => {
                self.hits[idx] = true;
                true
            }
            None => false,
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    pub fn status(&self) -> ShipStatus {
        ShipStatus {
            class: self.class,
            cells: self.cells.clone(),
            hits: self.hits.clone(),
            sunk: self.is_sunk(),
        }
    }
}

/// Read-only view of a ship for display collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipStatus {
    pub class: ShipClass,
    pub cells: Vec<Coord>,
    pub hits: Vec<bool>,
    pub sunk: bool,
}

/// All ships owned by one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.ships.clear();
    }

    pub(crate) fn push(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// The ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(coord))
    }

    pub(crate) fn ship_at_mut(&mut self, coord: Coord) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.contains(coord))
    }

    /// `true` once every ship is sunk; vacuously true for an empty fleet.
    pub fn is_defeated(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Ships still afloat.
    pub fn remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::size).sum()
    }

    pub fn status(&self) -> Vec<ShipStatus> {
        self.ships.iter().map(Ship::status).collect()
    }
}
