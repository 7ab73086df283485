use serde::Serialize;

use crate::game::{Game, MoveOutcome};
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::types::{Direction, Pos};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    /// A recorded move was not accepted when re-applied.
    Divergence { seq: u64, outcome: MoveOutcome },
    UnsupportedFormat { format_version: u16 },
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveScriptError {
    UnknownSymbol { symbol: char, offset: usize },
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ReplayResult {
    pub seed: u32,
    pub rooms_cleared: u32,
    pub player: Pos,
    pub moves_applied: usize,
    pub final_snapshot_hash: u64,
}

impl ReplayResult {
    pub fn from_game(game: &Game, moves_applied: usize) -> Self {
        Self {
            seed: game.seed(),
            rooms_cleared: game.rooms_cleared(),
            player: game.player(),
            moves_applied,
            final_snapshot_hash: game.snapshot_hash(),
        }
    }
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat { format_version: journal.format_version });
    }

    let mut game = Game::new(journal.seed);
    for (record, direction) in journal.inputs.iter().zip(journal.directions()) {
        let outcome = game.move_player(direction);
        if !outcome.is_accepted() {
            return Err(ReplayError::Divergence { seq: record.seq, outcome });
        }
    }

    Ok(ReplayResult::from_game(&game, journal.inputs.len()))
}

/// Apply every move of a script, rejected ones included, and return the resulting game.
pub fn play_script(seed: u32, moves: &[Direction]) -> Game {
    let mut game = Game::new(seed);
    for &direction in moves {
        game.move_player(direction);
    }
    game
}

/// `W`/`^` up, `S`/`v` down, `A`/`<` left, `D`/`>` right; case-insensitive letters,
/// whitespace ignored.
pub fn parse_move_script(script: &str) -> Result<Vec<Direction>, MoveScriptError> {
    let mut moves = Vec::with_capacity(script.len());
    for (offset, symbol) in script.char_indices() {
        if symbol.is_whitespace() {
            continue;
        }
        let direction = match symbol.to_ascii_uppercase() {
            'W' | '^' => Direction::Up,
            'S' | 'V' => Direction::Down,
            'A' | '<' => Direction::Left,
            'D' | '>' => Direction::Right,
            _ => return Err(MoveScriptError::UnknownSymbol { symbol, offset }),
        };
        moves.push(direction);
    }
    Ok(moves)
}

pub fn format_move_script(moves: &[Direction]) -> String {
    moves
        .iter()
        .map(|direction| match direction {
            Direction::Up => 'W',
            Direction::Down => 'S',
            Direction::Left => 'A',
            Direction::Right => 'D',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DEFAULT_SEED;

    #[test]
    fn parses_letters_and_arrows() {
        let moves = parse_move_script("wW ^ s v A< d>").expect("script should parse");
        assert_eq!(
            moves,
            vec![
                Direction::Up,
                Direction::Up,
                Direction::Up,
                Direction::Down,
                Direction::Down,
                Direction::Left,
                Direction::Left,
                Direction::Right,
                Direction::Right,
            ]
        );
    }

    #[test]
    fn unknown_symbol_reports_its_offset() {
        let err = parse_move_script("WW x").expect_err("x is not a move");
        assert_eq!(err, MoveScriptError::UnknownSymbol { symbol: 'x', offset: 3 });
    }

    #[test]
    fn format_and_parse_agree() {
        let moves = vec![Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        let script = format_move_script(&moves);
        assert_eq!(script, "WASD");
        assert_eq!(parse_move_script(&script), Ok(moves));
    }

    #[test]
    fn replaying_recorded_journal_reaches_the_same_snapshot() {
        let mut game = Game::new(DEFAULT_SEED);
        game.move_player(Direction::Up);
        game.move_player(Direction::Left);
        game.move_player(Direction::Left);
        game.move_player(Direction::Down);

        let result = replay_to_end(game.journal()).expect("recorded journal should replay");
        assert_eq!(result.final_snapshot_hash, game.snapshot_hash());
        assert_eq!(result.moves_applied, 3);
        assert_eq!(result.player, Pos { y: 1, x: 2 });
    }

    #[test]
    fn replay_reports_the_first_diverging_record() {
        let mut journal = InputJournal::new(DEFAULT_SEED);
        journal.append_move(Direction::Up, 0);
        journal.append_move(Direction::Left, 1);
        journal.append_move(Direction::Down, 2);

        let err = replay_to_end(&journal).expect_err("third move walks into the bottom row");
        assert_eq!(err, ReplayError::Divergence { seq: 2, outcome: MoveOutcome::Rejected });
    }

    #[test]
    fn replay_rejects_unknown_format_versions() {
        let mut journal = InputJournal::new(DEFAULT_SEED);
        journal.format_version = 99;
        assert_eq!(
            replay_to_end(&journal),
            Err(ReplayError::UnsupportedFormat { format_version: 99 })
        );
    }
}
