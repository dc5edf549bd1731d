//! Window configuration for the desktop app.

use app::APP_NAME;
use macroquad::window::Conf;
use maze_core::GameConfig;

pub fn build_window_conf() -> Conf {
    let world = GameConfig::default();
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: world.world_width as i32,
        window_height: world.world_height as i32,
        // Linux desktop sessions may not scale low-DPI framebuffers automatically.
        high_dpi: true,
        ..Default::default()
    }
}
