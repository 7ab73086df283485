use std::fs;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use paths_core::replay::{parse_move_script, play_script, replay_to_end};
use paths_core::{DEFAULT_SEED, Game, InputJournal, MoveOutcome, ReplayResult};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a room layout and its path order
    Room {
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u32,
        /// Auto-clear this many rooms first and print the room reached
        #[arg(short, long, default_value_t = 0)]
        rooms_cleared: u32,
    },
    /// Apply a WASD move script and print where it ends
    Replay {
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u32,
        #[arg(short, long)]
        moves: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a journal JSON file written by a previous run
    Journal {
        /// Path to the journal JSON file to replay
        #[arg(short, long)]
        path: String,
    },
    /// Auto-clear rooms and print the seed chain
    Solve {
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u32,
        #[arg(short, long, default_value_t = 10)]
        rooms: u32,
    },
}

fn main() -> Result<()> {
    match Args::parse().command {
        Command::Room { seed, rooms_cleared } => print_room(seed, rooms_cleared),
        Command::Replay { seed, moves, json } => replay_script(seed, &moves, json),
        Command::Journal { path } => replay_journal_file(&path),
        Command::Solve { seed, rooms } => solve(seed, rooms),
    }
}

fn print_room(seed: u32, rooms_cleared: u32) -> Result<()> {
    let mut game = Game::new(seed);
    for index in 0..rooms_cleared {
        clear_or_bail(&mut game, index)?;
    }

    let room = game.room();
    println!("Seed {} after {} cleared rooms:", game.seed(), game.rooms_cleared());
    println!("{}", room.to_ascii());
    let path: Vec<String> = room.path().map(|pos| format!("({},{})", pos.x, pos.y)).collect();
    println!("Path ({} tiles): {}", path.len(), path.join(" "));
    Ok(())
}

fn replay_script(seed: u32, script: &str, json: bool) -> Result<()> {
    let moves = parse_move_script(script)
        .map_err(|e| anyhow::anyhow!("Invalid move script: {:?}", e))?;
    let game = play_script(seed, &moves);
    let result = ReplayResult::from_game(&game, game.journal().inputs.len());

    if json {
        let encoded =
            serde_json::to_string_pretty(&result).context("Failed to serialize replay result")?;
        println!("{encoded}");
        return Ok(());
    }

    print_result(&result);
    if let Some(event) = game.log().last() {
        println!("Last event: {event:?}");
    }
    Ok(())
}

fn replay_journal_file(path: &str) -> Result<()> {
    let journal_data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {path}"))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result = replay_to_end(&journal)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {:?}", e))?;

    println!("Replay complete.");
    print_result(&result);
    Ok(())
}

fn solve(seed: u32, rooms: u32) -> Result<()> {
    let mut game = Game::new(seed);
    println!("room 0: seed {} ({} free tiles)", game.seed(), game.room().free_count());
    for index in 0..rooms {
        clear_or_bail(&mut game, index)?;
        println!(
            "room {}: seed {} ({} free tiles)",
            game.rooms_cleared(),
            game.seed(),
            game.room().free_count()
        );
    }
    println!("Snapshot Hash: 0x{:016x}", game.snapshot_hash());
    Ok(())
}

fn clear_or_bail(game: &mut Game, index: u32) -> Result<()> {
    game.room()
        .validate_path()
        .map_err(|e| anyhow::anyhow!("Room {index} has a broken path: {:?}", e))?;
    let outcome = game.clear_room();
    if outcome != MoveOutcome::RoomCleared {
        bail!("Room {index} (seed {}) did not clear: {outcome:?}", game.seed());
    }
    Ok(())
}

fn print_result(result: &ReplayResult) {
    println!("Seed: {}", result.seed);
    println!("Rooms Cleared: {}", result.rooms_cleared);
    println!("Player: ({},{})", result.player.x, result.player.y);
    println!("Moves Applied: {}", result.moves_applied);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);
}
