//! Procedural room generation: a straight base path widened by spliced detours.

pub mod model;

mod generator;
mod seed;
mod splice;

pub use generator::RoomGenerator;
pub use model::GeneratedRoom;

use crate::room::RoomDims;

/// Consecutive failed carving iterations tolerated before a room is accepted as-is.
pub const MAX_FAILED_ITERATIONS: u32 = 10;
/// Carving stops once at most `interior / DENSITY_DIVISOR` tiles remain blocked.
pub const DENSITY_DIVISOR: usize = 8;
/// Longest detour depth a single splice may carve.
pub const MAX_STRETCH: usize = 9;
pub const MIN_STRETCH: usize = 2;

pub fn generate_room(seed: u32) -> GeneratedRoom {
    RoomGenerator::new(RoomDims::default()).generate(seed)
}
