pub mod game;
pub mod journal;
pub mod mapgen;
pub mod pixels;
pub mod replay;
pub mod rng;
pub mod room;
pub mod types;

pub use game::{DEFAULT_SEED, Game, GameEvent, MoveOutcome, RunState};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use mapgen::{GeneratedRoom, RoomGenerator, generate_room};
pub use pixels::PixelBuffer;
pub use replay::*;
pub use rng::advance;
pub use room::{PathError, Room, RoomDims, Tile};
pub use types::*;
