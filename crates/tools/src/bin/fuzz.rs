use anyhow::{Result, bail, ensure};
use clap::Parser;
use paths_core::{Direction, Game, MoveOutcome};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u32,
    #[arg(short, long, default_value_t = 10_000)]
    moves: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} moves...", args.seed, args.moves);
    let mut game = Game::new(args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(args.seed));
    let spawn = game.player();

    let mut cleared = 0u32;
    let mut resets = 0u32;
    for step in 0..args.moves {
        let free_before = game.room().free_count();
        let left_free_tile = game.room().is_free(game.player());
        let log_len_before = game.log().len();
        let direction = choose(&mut rng, &Direction::ROTATION);
        let outcome = game.move_player(direction);

        // Assert invariants
        let room = game.room();
        let player = game.player();
        ensure!(
            room.is_free(player) || player == spawn,
            "step {step}: player {player:?} stands on a blocked tile"
        );
        match outcome {
            MoveOutcome::Moved => ensure!(
                room.free_count() == free_before - usize::from(left_free_tile),
                "step {step}: moving changed free tiles from {free_before} to {}",
                room.free_count()
            ),
            MoveOutcome::Rejected => ensure!(
                room.free_count() == free_before && game.log().len() == log_len_before,
                "step {step}: a rejected move changed the game"
            ),
            MoveOutcome::RoomCleared | MoveOutcome::RoomReset => {
                if outcome == MoveOutcome::RoomCleared {
                    cleared += 1;
                } else {
                    resets += 1;
                }
                ensure!(player == spawn, "step {step}: new room did not respawn the player");
                room.validate_path().map_err(|e| {
                    anyhow::anyhow!("step {step}: seed {} produced {:?}", game.seed(), e)
                })?;
            }
            MoveOutcome::Ignored => bail!("step {step}: game stopped accepting moves"),
        }
    }

    println!(
        "Fuzz run completed: {cleared} rooms cleared, {resets} resets, snapshot 0x{:016x}",
        game.snapshot_hash()
    );
    Ok(())
}
