//! Deterministic 32-bit state advance that drives room carving and seed evolution.
//! Values must stay bit-for-bit stable: every generated room is a function of them.

const ADD_MASK: u32 = 141_650_963;
const ADD_FACTOR: u32 = 433_024_223;
const SUB_MASK: u32 = 7_187;
const SUB_FACTOR: u32 = 941_083_981;

/// Produce the next pseudo-random value from the current one.
pub fn advance(state: u32) -> u32 {
    state
        .wrapping_add(23)
        .wrapping_add((state & ADD_MASK).wrapping_mul(ADD_FACTOR))
        .wrapping_sub((state & SUB_MASK).wrapping_mul(SUB_FACTOR))
}

/// Running `advance` stream scoped to one room generation.
#[derive(Clone, Debug)]
pub struct RoomRng {
    state: u32,
}

impl RoomRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = advance(self.state);
        self.state
    }

    pub fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        self.next_u32() as usize % bound
    }
}
