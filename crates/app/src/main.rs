mod frame_input;
mod ui_render;
mod window_config;

use std::env;
use std::fs;
use std::path::Path;

use app::app_loop::AppState;
use app::launch::{generate_runtime_seed, load_config, parse_launch_args};
use app::{format_seed, format_snapshot_hash};
use macroquad::prelude::*;
use maze_core::journal::InputJournal;
use maze_core::{Game, Millis};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_args(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(err) => {
            error!("{err}");
            return;
        }
    };
    let config = match load_config(options.config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return;
        }
    };
    let seed = options.seed.value();
    let mut game = match Game::new(seed, config, 0) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, "invalid game config");
            return;
        }
    };
    info!(seed = %format_seed(seed), source = ?options.seed, "starting run");

    let mut app = AppState::new(&game);
    let origin = get_time();
    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        let now = ((get_time() - origin) * 1000.0).max(0.0) as Millis;
        let input = frame_input::capture_frame_input();
        app.set_screen_size(screen_width(), screen_height());
        app.tick(&mut game, &input, now);

        ui_render::draw_frame(&game.frame(now), seed, app.screen_width, app.screen_height);
        next_frame().await;
    }

    info!(
        level = game.level(),
        hash = %format_snapshot_hash(game.snapshot_hash()),
        "run closed"
    );
    if let Some(path) = options.journal_path.as_deref() {
        write_journal(&app.journal, path);
    }
}

fn write_journal(journal: &InputJournal, path: &Path) {
    let json = match journal.to_json() {
        Ok(json) => json,
        Err(err) => {
            error!(%err, "failed to encode journal");
            return;
        }
    };
    match fs::write(path, json) {
        Ok(()) => info!(path = %path.display(), records = journal.records.len(), "journal saved"),
        Err(err) => error!(%err, path = %path.display(), "failed to write journal"),
    }
}
