//! Pseudo-random draws taken from the room stream, in the order the carver consumes them.

use crate::rng::RoomRng;
use crate::room::Room;
use crate::types::{Direction, Pos};

use super::{MAX_STRETCH, MIN_STRETCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct BranchDraw {
    pub(super) stretch: usize,
    pub(super) first_direction: usize,
}

impl BranchDraw {
    pub(super) fn directions(self) -> impl Iterator<Item = Direction> {
        (0..Direction::ROTATION.len())
            .map(move |turn| Direction::ROTATION[(self.first_direction + turn) % 4])
    }
}

pub(super) fn draw_blocked_index(rng: &mut RoomRng, remaining_blocked: usize) -> usize {
    rng.next_below(remaining_blocked)
}

pub(super) fn draw_branch(rng: &mut RoomRng) -> BranchDraw {
    let value = rng.next_u32() as usize;
    let stretch_span = MAX_STRETCH - MIN_STRETCH + 1;
    BranchDraw {
        stretch: MIN_STRETCH + value % stretch_span,
        first_direction: (value >> 3) % Direction::ROTATION.len(),
    }
}

/// The `index`-th blocked interior tile, walking the grid row-major and skipping free tiles.
pub(super) fn nth_blocked_interior_tile(room: &Room, index: usize) -> Option<Pos> {
    room.positions().filter(|&pos| room.is_interior(pos) && !room.is_free(pos)).nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomDims;

    #[test]
    fn branch_stretch_stays_in_range() {
        let mut rng = RoomRng::new(99);
        for _ in 0..200 {
            let draw = draw_branch(&mut rng);
            assert!((MIN_STRETCH..=MAX_STRETCH).contains(&draw.stretch));
            assert!(draw.first_direction < 4);
        }
    }

    #[test]
    fn directions_rotate_from_the_drawn_start() {
        let draw = BranchDraw { stretch: 2, first_direction: 2 };
        let order: Vec<Direction> = draw.directions().collect();
        assert_eq!(order, vec![Direction::Down, Direction::Left, Direction::Up, Direction::Right]);
    }

    #[test]
    fn blocked_index_skips_free_and_border_tiles() {
        let mut room = Room::blocked(RoomDims::default());
        room.set_free(Pos { y: 1, x: 0 }, true);
        room.set_free(Pos { y: 1, x: 2 }, true);

        assert_eq!(nth_blocked_interior_tile(&room, 0), Some(Pos { y: 1, x: 1 }));
        assert_eq!(nth_blocked_interior_tile(&room, 1), Some(Pos { y: 1, x: 3 }));
        assert_eq!(nth_blocked_interior_tile(&room, 7), Some(Pos { y: 2, x: 0 }));
        assert_eq!(nth_blocked_interior_tile(&room, 43), None);
    }
}
