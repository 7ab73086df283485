use paths_core::{DEFAULT_SEED, Direction, Game, MoveOutcome, Pos, RunState};

#[test]
fn test_smoke_clears_a_run_of_rooms() {
    let mut game = Game::new(DEFAULT_SEED);

    for cleared in 1..=20 {
        let free_before = game.room().free_count();
        assert_eq!(game.room().validate_path(), Ok(free_before));
        assert_eq!(game.solution().len(), free_before);

        assert_eq!(game.clear_room(), MoveOutcome::RoomCleared, "room {cleared} should clear");
        assert_eq!(game.rooms_cleared(), cleared);
        assert_eq!(game.player(), Pos { y: 0, x: 4 });
    }
    assert!(game.is_running());
}

#[test]
fn test_smoke_climbing_the_start_column_stops_under_the_wall() {
    let mut game = Game::new(DEFAULT_SEED);

    for _ in 0..5 {
        assert_eq!(game.move_player(Direction::Up), MoveOutcome::Moved);
    }
    assert_eq!(game.player(), Pos { y: 5, x: 4 });
    assert_eq!(game.move_player(Direction::Up), MoveOutcome::Rejected);
    assert_eq!(game.room().free_count(), 41 - 4);
}

#[test]
fn test_smoke_terminate_stops_the_run() {
    let mut game = Game::new(DEFAULT_SEED);
    game.move_player(Direction::Up);
    game.terminate();

    assert_eq!(game.run_state(), RunState::Terminated);
    assert_eq!(game.move_player(Direction::Left), MoveOutcome::Ignored);
    assert_eq!(game.player(), Pos { y: 1, x: 4 });
}
