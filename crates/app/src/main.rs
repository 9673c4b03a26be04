mod board_render;
mod frame_input;
mod game_layout;
mod window_config;

use std::env;
use std::process;

use board_render::draw_frame;
use frame_input::capture_frame_input;
use game_layout::{compute_frame_layout, setup_layout};
use goop_app::app_loop::AppState;
use goop_app::format_seed;
use goop_app::mesh_table::MeshTable;
use goop_app::seed::{SeedChoice, resolve_seed_from_args};
use goop_core::{Game, GeneratorConfig};
use log::{error, info};
use macroquad::window::{Conf, next_frame, screen_height, screen_width};
use taffy::TaffyTree;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed_choice = match resolve_seed_from_args(&args) {
        Ok(choice) => choice,
        Err(err) => {
            error!("{err}");
            process::exit(2);
        }
    };
    if seed_choice == SeedChoice::Default {
        info!("no --seed given; using the default seed");
    }

    let meshes = match MeshTable::builtin() {
        Ok(meshes) => meshes,
        Err(err) => {
            error!("mesh table: {err}");
            process::exit(1);
        }
    };

    let seed = seed_choice.value();
    let mut game = match Game::new(seed, GeneratorConfig::default()) {
        Ok(game) => game,
        Err(err) => {
            error!("first board: {err}");
            process::exit(1);
        }
    };
    info!("starting session with seed {}", format_seed(seed));

    let mut taffy = TaffyTree::new();
    let nodes = match setup_layout(&mut taffy) {
        Ok(nodes) => nodes,
        Err(err) => {
            error!("layout: {err}");
            process::exit(1);
        }
    };

    let mut app_state = AppState::new();
    loop {
        let frame_input = capture_frame_input();
        if frame_input.quit {
            break;
        }
        app_state.tick(&mut game, &frame_input.keys_pressed);

        let layout = match compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height())
        {
            Ok(layout) => layout,
            Err(err) => {
                error!("layout: {err}");
                process::exit(1);
            }
        };
        draw_frame(&game, &app_state, &meshes, &layout);
        next_frame().await;
    }

    info!("session ended after {} inputs", game.input_count());
}
