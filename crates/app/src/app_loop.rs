use macroquad::prelude::KeyCode;
use paths_core::{Direction, Game, MoveOutcome};

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    Closed,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Outcomes of the moves handled during the current frame's `tick()` call.
    pub frame_outcomes: Vec<MoveOutcome>,
    /// Set when the room image changed and the texture must be re-uploaded.
    pub needs_upload: bool,
}

/// Movement keys, each pressed key handled once per frame.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::W | KeyCode::Up => Some(Direction::Up),
        KeyCode::S | KeyCode::Down => Some(Direction::Down),
        KeyCode::A | KeyCode::Left => Some(Direction::Left),
        KeyCode::D | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

impl AppState {
    pub fn new() -> Self {
        Self { needs_upload: true, ..Self::default() }
    }

    /// Process the keys pressed this frame. A quit request (Escape, Alt+F4, or the
    /// window's close button) terminates the game before any move is applied.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode], quit_requested: bool) {
        self.frame_outcomes.clear();

        if self.mode == AppMode::Closed {
            return;
        }

        if quit_requested || keys_pressed.contains(&KeyCode::Escape) {
            game.terminate();
            self.mode = AppMode::Closed;
            return;
        }

        for &key in keys_pressed {
            let Some(direction) = direction_for_key(key) else {
                continue;
            };
            let outcome = game.move_player(direction);
            if outcome != MoveOutcome::Rejected && outcome != MoveOutcome::Ignored {
                self.needs_upload = true;
            }
            self.frame_outcomes.push(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppMode, AppState, direction_for_key};
    use macroquad::prelude::KeyCode;
    use paths_core::{DEFAULT_SEED, Direction, Game, MoveOutcome, RunState};

    #[test]
    fn letter_and_arrow_keys_share_directions() {
        for (letter, arrow, direction) in [
            (KeyCode::W, KeyCode::Up, Direction::Up),
            (KeyCode::S, KeyCode::Down, Direction::Down),
            (KeyCode::A, KeyCode::Left, Direction::Left),
            (KeyCode::D, KeyCode::Right, Direction::Right),
        ] {
            assert_eq!(direction_for_key(letter), Some(direction));
            assert_eq!(direction_for_key(arrow), Some(direction));
        }
        assert_eq!(direction_for_key(KeyCode::Space), None);
    }

    #[test]
    fn escape_closes_the_app_and_terminates_the_game() {
        let mut game = Game::new(DEFAULT_SEED);
        let mut app = AppState::new();

        app.tick(&mut game, &[KeyCode::Escape, KeyCode::W], false);

        assert_eq!(app.mode, AppMode::Closed);
        assert_eq!(game.run_state(), RunState::Terminated);
        assert!(app.frame_outcomes.is_empty());
    }

    #[test]
    fn rejected_moves_do_not_request_an_upload() {
        let mut game = Game::new(DEFAULT_SEED);
        let mut app = AppState::new();
        app.needs_upload = false;

        app.tick(&mut game, &[KeyCode::S], false);

        assert_eq!(app.frame_outcomes, vec![MoveOutcome::Rejected]);
        assert!(!app.needs_upload);
    }
}
