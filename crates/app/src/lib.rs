use paths_core::MoveOutcome;

pub mod app_loop;
pub mod seed;

pub const APP_NAME: &str = "Paths";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u32) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

pub fn outcome_code(outcome: MoveOutcome) -> &'static str {
    match outcome {
        MoveOutcome::Moved => "MOVED",
        MoveOutcome::Rejected => "REJECTED",
        MoveOutcome::RoomCleared => "ROOM_CLEARED",
        MoveOutcome::RoomReset => "ROOM_RESET",
        MoveOutcome::Ignored => "IGNORED",
    }
}
