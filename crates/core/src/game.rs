use crate::journal::InputJournal;
use crate::mapgen::RoomGenerator;
use crate::pixels::PixelBuffer;
use crate::room::{Room, RoomDims};
use crate::types::{Direction, Pos};

mod hash;
mod navigation;
mod solve;

#[cfg(test)]
mod test_support;

/// Seed of the very first room of a run.
pub const DEFAULT_SEED: u32 = 420_023;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Playing,
    Terminated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Target blocked while another neighbour is still free. Leaves no trace.
    Rejected,
    /// Last free tile taken: the counter and seed advanced and a new room was built.
    RoomCleared,
    /// Player boxed in with free tiles left elsewhere; the room was rebuilt as-is.
    RoomReset,
    /// The run is no longer playing.
    Ignored,
}

impl MoveOutcome {
    /// Outcomes that changed state and therefore belong in the journal.
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Moved | MoveOutcome::RoomCleared | MoveOutcome::RoomReset)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Moved { from: Pos, to: Pos },
    RoomCleared { rooms_cleared: u32, seed: u32 },
    RoomReset { free_tiles_left: usize },
    Terminated,
}

pub struct Game {
    run_state: RunState,
    seed: u32,
    rooms_cleared: u32,
    player: Pos,
    generator: RoomGenerator,
    room: Room,
    buffer: PixelBuffer,
    log: Vec<GameEvent>,
    journal: InputJournal,
    next_input_seq: u64,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        Self::with_dims(seed, RoomDims::default())
    }

    pub fn with_dims(seed: u32, dims: RoomDims) -> Self {
        let generator = RoomGenerator::new(dims);
        let generated = generator.generate(seed);
        let mut game = Self {
            run_state: RunState::Playing,
            seed,
            rooms_cleared: 0,
            player: generated.spawn,
            generator,
            room: generated.room,
            buffer: PixelBuffer::for_room(dims),
            log: Vec::new(),
            journal: InputJournal::new(seed),
            next_input_seq: 0,
        };
        game.redraw();
        game
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Playing
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn rooms_cleared(&self) -> u32 {
        self.rooms_cleared
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn log(&self) -> &[GameEvent] {
        &self.log
    }

    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    pub fn terminate(&mut self) {
        if self.run_state == RunState::Terminated {
            return;
        }
        self.run_state = RunState::Terminated;
        self.log.push(GameEvent::Terminated);
    }

    fn redraw(&mut self) {
        self.buffer.redraw(&self.room, self.player);
    }
}
