//! Move handling and room turnover.
//! A move either steps onto a free tile, rebuilds the room when the player is boxed in,
//! or is rejected without touching any state, the event log included.

use log::info;

use super::*;
use crate::rng::advance;

impl Game {
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        if self.run_state != RunState::Playing {
            return MoveOutcome::Ignored;
        }

        let from = self.player;
        let target = from.step(direction);
        let outcome = if self.room.is_free(target) {
            self.room.set_free(from, false);
            self.player = target;
            self.log.push(GameEvent::Moved { from, to: target });
            self.redraw();
            MoveOutcome::Moved
        } else if !self.room.has_free_neighbor(from) {
            self.finish_room()
        } else {
            MoveOutcome::Rejected
        };

        if outcome.is_accepted() {
            self.journal.append_move(direction, self.next_input_seq);
            self.next_input_seq += 1;
        }
        outcome
    }

    /// Rebuild the current room from the current seed and put the player back on spawn.
    pub fn reset_room(&mut self) {
        let generated = self.generator.generate(self.seed);
        self.room = generated.room;
        self.player = generated.spawn;
        self.buffer.resize_for(self.room.dims());
        self.redraw();
    }

    fn finish_room(&mut self) -> MoveOutcome {
        let free_tiles_left = self.room.free_count();
        let outcome = if free_tiles_left == 1 {
            self.rooms_cleared += 1;
            self.seed = advance(self.seed.wrapping_add(self.rooms_cleared));
            info!("room cleared ({} total); next seed {}", self.rooms_cleared, self.seed);
            self.log.push(GameEvent::RoomCleared {
                rooms_cleared: self.rooms_cleared,
                seed: self.seed,
            });
            MoveOutcome::RoomCleared
        } else {
            info!("player boxed in with {free_tiles_left} free tiles left; rebuilding room");
            self.log.push(GameEvent::RoomReset { free_tiles_left });
            MoveOutcome::RoomReset
        };
        self.reset_room();
        outcome
    }
}
