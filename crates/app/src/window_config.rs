//! Window configuration for the desktop app.

use macroquad::window::Conf;
use paths_app::APP_NAME;

const DEFAULT_WINDOW_WIDTH: i32 = 660;
const DEFAULT_WINDOW_HEIGHT: i32 = 540;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Linux desktop sessions may not scale low-DPI framebuffers automatically.
        high_dpi: true,
        ..Default::default()
    }
}
