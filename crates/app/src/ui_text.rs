//! Text formatting for the status panel and event log entries.

use paths_app::app_loop::AppMode;
use paths_app::{format_seed, format_snapshot_hash};
use paths_core::{Game, GameEvent, Pos};

pub fn status_text(mode: &AppMode) -> &'static str {
    match mode {
        AppMode::Playing => "WASD or arrows to move, Esc to quit",
        AppMode::Closed => "Closed",
    }
}

pub fn status_lines(game: &Game, run_seed: u32) -> Vec<String> {
    vec![
        format!(
            "Seed: {}  Room seed: {}  Rooms cleared: {}",
            format_seed(run_seed),
            format_seed(game.seed()),
            game.rooms_cleared()
        ),
        format!(
            "Free tiles: {}  Snapshot: {}",
            game.room().free_count(),
            format_snapshot_hash(game.snapshot_hash())
        ),
    ]
}

pub fn event_log_line(event: &GameEvent) -> String {
    match event {
        GameEvent::Moved { from, to } => format!("moved {} -> {}", pos_text(*from), pos_text(*to)),
        GameEvent::RoomCleared { rooms_cleared, seed } => {
            format!("room {rooms_cleared} cleared, next seed {seed}")
        }
        GameEvent::RoomReset { free_tiles_left } => {
            format!("boxed in with {free_tiles_left} left, room reset")
        }
        GameEvent::Terminated => "terminated".to_string(),
    }
}

fn pos_text(pos: Pos) -> String {
    format!("({},{})", pos.x, pos.y)
}
