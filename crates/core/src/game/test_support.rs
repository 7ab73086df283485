//! Shared room fixtures for the `game` test suite.
//! Fixtures install hand-built rooms so navigation edge cases do not depend on a seed.

use super::*;

/// Install `room` and `player` into a fresh game, replacing the generated room.
pub(super) fn game_with_room(room: Room, player: Pos) -> Game {
    let mut game = Game::new(DEFAULT_SEED);
    game.room = room;
    game.player = player;
    game.redraw();
    game
}

/// Room whose only free tile is the one under the player.
pub(super) fn last_tile_fixture() -> (Room, Pos) {
    let mut room = Room::blocked(RoomDims::default());
    let player = Pos { y: 3, x: 2 };
    room.set_free(player, true);
    (room, player)
}

/// Player boxed in at (2,3) while a separate corridor stays free elsewhere.
pub(super) fn boxed_in_fixture() -> (Room, Pos) {
    let (mut room, player) = last_tile_fixture();
    for x in 6..=8 {
        room.set_free(Pos { y: 5, x }, true);
    }
    (room, player)
}

/// Player at the bottom of a short corridor that continues right, with a blocked tile above.
pub(super) fn corridor_fixture() -> (Room, Pos) {
    let mut room = Room::blocked(RoomDims::default());
    let player = Pos { y: 2, x: 1 };
    for x in 1..=4 {
        room.set_free(Pos { y: 2, x }, true);
    }
    for x in 1..4 {
        room.link(Pos { y: 2, x }, Pos { y: 2, x: x + 1 });
    }
    (room, player)
}
