use super::*;

impl Game {
    /// Directions that walk the player along the remaining linked path.
    /// Empty once the player stands on the path's last free tile.
    pub fn solution(&self) -> Vec<Direction> {
        let start = if self.room.is_free(self.player) {
            Some(self.player)
        } else {
            self.room.path_head()
        };

        let mut steps = Vec::new();
        let mut at = self.player;
        for next in self.room.path_from(start) {
            if next == at {
                continue;
            }
            let Some(direction) = Direction::between(at, next) else {
                break;
            };
            steps.push(direction);
            at = next;
        }
        steps
    }

    /// Walk the remaining path, then knock against a blocked neighbour to turn the room
    /// over. Returns the outcome that ended the walk.
    pub fn clear_room(&mut self) -> MoveOutcome {
        if !self.is_running() {
            return MoveOutcome::Ignored;
        }
        for direction in self.solution() {
            let outcome = self.move_player(direction);
            if outcome != MoveOutcome::Moved {
                return outcome;
            }
        }

        let knock = Direction::ROTATION
            .into_iter()
            .find(|&direction| !self.room.is_free(self.player.step(direction)));
        match knock {
            Some(direction) => self.move_player(direction),
            None => MoveOutcome::Rejected,
        }
    }
}
