//! Rendering for the room image and the text panels.

use crate::game_layout::{FrameLayout, PanelRect};
use crate::ui_text::{event_log_line, status_lines, status_text};
use macroquad::prelude::*;
use paths_app::app_loop::AppState;
use paths_core::{Game, PixelBuffer};

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const PANEL_PAD_X: f32 = 10.0;
const PANEL_PAD_Y: f32 = 20.0;
const LINE_HEIGHT: f32 = 18.0;
const EVENT_LOG_LINES: usize = 20;

/// Upload the room buffer as a nearest-filtered texture.
pub fn room_texture(buffer: &PixelBuffer) -> Texture2D {
    let texture = Texture2D::from_rgba8(
        buffer.width() as u16,
        buffer.height() as u16,
        &buffer.to_rgba_top_down(),
    );
    texture.set_filter(FilterMode::Nearest);
    texture
}

pub fn draw_frame(
    game: &Game,
    app_state: &AppState,
    run_seed: u32,
    room_texture: &Texture2D,
    layout: &FrameLayout,
) {
    draw_panel_borders(layout);
    draw_room(room_texture, layout.room);
    draw_status_panel(game, app_state, run_seed, layout.status);
    draw_event_log(game, layout.event_log);
}

fn draw_panel_borders(layout: &FrameLayout) {
    for panel in [layout.status, layout.event_log] {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            BORDER_THICKNESS,
            BORDER_COLOR,
        );
    }
}

/// Stretch the room image over the whole panel.
fn draw_room(texture: &Texture2D, panel: PanelRect) {
    draw_texture_ex(
        texture,
        panel.x,
        panel.y,
        WHITE,
        DrawTextureParams { dest_size: Some(vec2(panel.width, panel.height)), ..Default::default() },
    );
}

fn draw_status_panel(game: &Game, app_state: &AppState, run_seed: u32, panel: PanelRect) {
    let text_x = panel.x + PANEL_PAD_X;
    let mut text_y = panel.y + PANEL_PAD_Y;

    draw_text(status_text(&app_state.mode), text_x, text_y, 20.0, YELLOW);
    for line in status_lines(game, run_seed) {
        text_y += LINE_HEIGHT;
        draw_text(&line, text_x, text_y, 18.0, WHITE);
    }
}

fn draw_event_log(game: &Game, panel: PanelRect) {
    draw_text("Event log", panel.x + PANEL_PAD_X, panel.y + PANEL_PAD_Y, 20.0, YELLOW);
    let events = game.log();
    let start = events.len().saturating_sub(EVENT_LOG_LINES);

    for (index, event) in events[start..].iter().enumerate() {
        draw_text(
            &event_log_line(event),
            panel.x + PANEL_PAD_X,
            panel.y + PANEL_PAD_Y + (index as f32 + 1.0) * LINE_HEIGHT,
            16.0,
            LIGHTGRAY,
        );
    }
}
