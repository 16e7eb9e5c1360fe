//! Shot-selection policies for machine players.

use alloc::boxed::Box;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::bitboard::CellMask;
use crate::common::{Coord, ShotOutcome};
use crate::config::{Difficulty, BOARD_SIZE};

/// Picks where a machine player fires next.
pub trait TargetingStrategy: Send {
    /// Choose an unfired coordinate. `None` once every cell has been fired at.
    fn select_target(&mut self, rng: &mut SmallRng, fired: &CellMask) -> Option<Coord>;

    /// Feedback on the shot just resolved at `coord`.
    fn record_outcome(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    fn name(&self) -> &'static str;
}

/// Fires at uniformly random unfired cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandom;

impl UniformRandom {
    pub fn new() -> Self {
        Self
    }

    fn draw<R: Rng + ?Sized>(rng: &mut R, fired: &CellMask) -> Option<Coord> {
        if fired.is_full() {
            return None;
        }
        loop {
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            if !fired.get(row, col).unwrap_or(true) {
                return Some(Coord::new(row, col));
            }
        }
    }
}

impl TargetingStrategy for UniformRandom {
    fn select_target(&mut self, rng: &mut SmallRng, fired: &CellMask) -> Option<Coord> {
        Self::draw(rng, fired)
    }

    fn name(&self) -> &'static str {
        "uniform-random"
    }
}

/// Random fire until something is hit, then probes the orthogonal
/// neighbours of the last hit.
///
/// The remembered hit is dropped when a ship sinks and, unless
/// [`HuntTarget::keep_target_on_miss`] is set, on any miss as well. Hunting
/// therefore only chains across consecutive hits.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuntTarget {
    last_hit: Option<Coord>,
    keep_on_miss: bool,
}

impl HuntTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep chasing the last hit after a miss instead of reverting to random fire.
    pub fn keep_target_on_miss(mut self, keep: bool) -> Self {
        self.keep_on_miss = keep;
        self
    }

    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    /// Neighbours of `hit`, clamped to the board. Clamping at an edge yields
    /// `hit` itself, which is already fired and so gets filtered out.
    fn neighbours(hit: Coord) -> [Coord; 4] {
        let max = BOARD_SIZE - 1;
        [
            Coord::new(hit.row.saturating_sub(1), hit.col),
            Coord::new((hit.row + 1).min(max), hit.col),
            Coord::new(hit.row, hit.col.saturating_sub(1)),
            Coord::new(hit.row, (hit.col + 1).min(max)),
        ]
    }
}

impl TargetingStrategy for HuntTarget {
    fn select_target(&mut self, rng: &mut SmallRng, fired: &CellMask) -> Option<Coord> {
        if let Some(hit) = self.last_hit {
            let mut candidates = Self::neighbours(hit);
            candidates.shuffle(rng);
            let next = candidates
                .into_iter()
                .find(|c| !fired.get(c.row, c.col).unwrap_or(true));
            if next.is_some() {
                return next;
            }
        }
        UniformRandom::draw(rng, fired)
    }

    fn record_outcome(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.last_hit = Some(coord),
            ShotOutcome::HitAndSunk(_) => self.last_hit = None,
            ShotOutcome::Miss if !self.keep_on_miss => self.last_hit = None,
            ShotOutcome::Miss => {}
        }
    }

    fn name(&self) -> &'static str {
        "hunt-target"
    }
}

/// Strategy used for a machine player of the given difficulty.
pub fn strategy_for(difficulty: Difficulty) -> Box<dyn TargetingStrategy> {
    match difficulty {
        Difficulty::Easy => Box::new(UniformRandom::new()),
        Difficulty::Hard => Box::new(HuntTarget::new()),
    }
}
