mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

use std::{env, process};

use frame_input::capture_frame_input;
use game_layout::{compute_frame_layout, setup_layout};
use macroquad::logging::{info, warn};
use macroquad::prelude::*;
use paths_app::app_loop::{AppMode, AppState};
use paths_app::seed::{SeedChoice, resolve_seed_from_args};
use paths_app::{format_seed, format_snapshot_hash};
use paths_core::Game;
use taffy::TaffyTree;
use ui_render::{draw_frame, room_texture};
use window_config::build_window_conf;

fn window_conf() -> Conf {
    build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let seed_choice = match resolve_seed_from_args(&args) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };
    let run_seed = seed_choice.value();
    match seed_choice {
        SeedChoice::Cli(seed) => info!("starting run with seed {}", format_seed(seed)),
        SeedChoice::Default(seed) => info!("starting run with default seed {}", format_seed(seed)),
    }

    prevent_quit();

    let mut game = Game::new(run_seed);
    let mut app_state = AppState::new();
    let mut taffy = TaffyTree::new();
    let layout_nodes = setup_layout(&mut taffy);
    let mut texture = room_texture(game.buffer());

    loop {
        let input = capture_frame_input();
        let rooms_before = game.rooms_cleared();
        app_state.tick(&mut game, &input.keys_pressed, input.quit_requested);

        if game.rooms_cleared() != rooms_before {
            info!("rooms cleared: {}, room seed {}", game.rooms_cleared(), game.seed());
        }
        if app_state.mode == AppMode::Closed {
            warn!(
                "run terminated after {} rooms, snapshot {}",
                game.rooms_cleared(),
                format_snapshot_hash(game.snapshot_hash())
            );
            break;
        }
        if app_state.needs_upload {
            texture = room_texture(game.buffer());
            app_state.needs_upload = false;
        }

        clear_background(BLACK);
        let layout = compute_frame_layout(&mut taffy, &layout_nodes, screen_width(), screen_height());
        draw_frame(&game, &app_state, run_seed, &texture, &layout);
        next_frame().await
    }
}
