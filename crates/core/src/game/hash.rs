//! Stable snapshot hashing for deterministic verification.
//! This module keeps hashing concerns separate from navigation code.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u32(self.seed);
        hasher.write_u32(self.rooms_cleared);
        hasher.write_u64(self.next_input_seq);
        hasher.write_u8(match self.run_state {
            RunState::Playing => 0,
            RunState::Terminated => 1,
        });
        hasher.write_i32(self.player.x);
        hasher.write_i32(self.player.y);
        hasher.write(&self.room.canonical_bytes());
        hasher.finish()
    }
}
