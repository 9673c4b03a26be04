//! Rendering for the board and the text panels around it.

use std::cmp::Reverse;

use crate::game_layout::FrameLayout;
use goop_app::app_loop::AppState;
use goop_app::board_view::BoardView;
use goop_app::hud_text::{footer_line, mode_hint, recent_event_lines, status_line};
use goop_app::mesh_table::{MeshStyle, MeshTable};
use goop_core::{Game, MeshInstance, draw_list};
use macroquad::prelude::*;

const BACKGROUND: Color = Color { r: 0.08, g: 0.08, b: 0.11, a: 1.0 };
const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const FRONT_FACE_SHADE: f32 = 0.6;
const PANEL_PAD_X: f32 = 15.0;
const PANEL_PAD_Y: f32 = 25.0;
const LINE_STEP: f32 = 18.0;

pub fn draw_frame(game: &Game, app_state: &AppState, meshes: &MeshTable, layout: &FrameLayout) {
    clear_background(BACKGROUND);
    for panel in [layout.status, layout.events, layout.info] {
        draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 1.0, BORDER_COLOR);
    }

    draw_board(game, meshes, layout.board);

    draw_text(
        &format!("{}   {}", status_line(game), mode_hint(&app_state.mode)),
        layout.status.x + PANEL_PAD_X,
        layout.status.y + PANEL_PAD_Y,
        20.0,
        WHITE,
    );

    let visible = ((layout.events.h - PANEL_PAD_Y) / LINE_STEP).max(0.0) as usize + 1;
    let mut text_y = layout.events.y + PANEL_PAD_Y;
    for line in recent_event_lines(game, visible) {
        draw_text(&line, layout.events.x + PANEL_PAD_X, text_y, 16.0, LIGHTGRAY);
        text_y += LINE_STEP;
    }

    draw_text(
        &footer_line(game),
        layout.info.x + PANEL_PAD_X,
        layout.info.y + PANEL_PAD_Y,
        16.0,
        GRAY,
    );
}

/// Back rows first, and within a cell terrain, then decoration, then the player.
fn painter_order(mut instances: Vec<MeshInstance>) -> Vec<MeshInstance> {
    instances.sort_by_key(|instance| (Reverse(instance.pos.y), instance.layer, instance.pos.x));
    instances
}

fn draw_board(game: &Game, meshes: &MeshTable, area: Rect) {
    let board = game.board();
    let view = BoardView::fit(board.width(), board.height(), area);
    for instance in painter_order(draw_list(board)) {
        draw_block(&view, instance, meshes.style(instance.role));
    }
}

fn draw_block(view: &BoardView, instance: MeshInstance, style: MeshStyle) {
    let x0 = instance.pos.x as f32 + style.inset;
    let x1 = instance.pos.x as f32 + 1.0 - style.inset;
    let y0 = instance.pos.y as f32 + style.inset;
    let y1 = instance.pos.y as f32 + 1.0 - style.inset;
    let top = style.height;

    if top > 0.0 {
        let front = Color::new(
            style.color.r * FRONT_FACE_SHADE,
            style.color.g * FRONT_FACE_SHADE,
            style.color.b * FRONT_FACE_SHADE,
            style.color.a,
        );
        draw_quad(
            [
                view.to_screen(x0, y0, 0.0),
                view.to_screen(x1, y0, 0.0),
                view.to_screen(x1, y0, top),
                view.to_screen(x0, y0, top),
            ],
            front,
        );
    }

    draw_quad(
        [
            view.to_screen(x0, y0, top),
            view.to_screen(x1, y0, top),
            view.to_screen(x1, y1, top),
            view.to_screen(x0, y1, top),
        ],
        style.color,
    );
}

fn draw_quad(corners: [Vec2; 4], color: Color) {
    draw_triangle(corners[0], corners[1], corners[2], color);
    draw_triangle(corners[0], corners[2], corners[3], color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use goop_core::{DrawLayer, GeneratorConfig, MeshRole};

    #[test]
    fn painter_order_draws_back_rows_first_and_player_over_its_cell() {
        let game = Game::new(3, GeneratorConfig::default()).expect("board generates");
        let ordered = painter_order(draw_list(game.board()));

        assert!(ordered.windows(2).all(|pair| pair[0].pos.y >= pair[1].pos.y));
        let player = game.board().player();
        let cell: Vec<DrawLayer> =
            ordered.iter().filter(|i| i.pos == player).map(|i| i.layer).collect();
        assert_eq!(cell.first(), Some(&DrawLayer::Terrain));
        assert_eq!(cell.last(), Some(&DrawLayer::Player));
        assert_eq!(ordered.iter().filter(|i| i.role == MeshRole::Player).count(), 1);
    }
}
