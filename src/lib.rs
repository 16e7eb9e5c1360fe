#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
mod resolver;
mod ship;
mod targeting;

pub use bitboard::{BitBoard, BitBoardError, CellMask};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{engine_level, init_logging, passes, LOG_ENV};
pub use player::*;
pub use resolver::resolve_shot;
pub use ship::*;
pub use targeting::*;
