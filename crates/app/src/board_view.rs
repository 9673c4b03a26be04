//! Board-to-screen transform.
//!
//! Board space has x to the right, y up and z out of the floor, one unit per
//! cell. A fixed shear leans the board back so that extruded meshes show a
//! front face, then a uniform scale fits the sheared board into the target
//! rectangle with its center on the rectangle's center.

use macroquad::math::{Rect, Vec2, vec2};

/// How far x leans per unit of y.
const SHEAR_X_PER_Y: f32 = -0.07;
/// Vertical squash of the board plane.
const SHEAR_Y_PER_Y: f32 = 0.9;
/// Screen rise per unit of extrusion height.
const SHEAR_Y_PER_Z: f32 = 0.2;
/// Tallest extrusion the fit leaves room for.
const MAX_HEIGHT: f32 = 1.0;

fn shear(x: f32, y: f32, z: f32) -> Vec2 {
    vec2(x + SHEAR_X_PER_Y * y, SHEAR_Y_PER_Y * y + SHEAR_Y_PER_Z * z)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardView {
    scale: f32,
    board_center: Vec2,
    screen_center: Vec2,
}

impl BoardView {
    pub fn fit(board_width: usize, board_height: usize, area: Rect) -> Self {
        let (width, height) = (board_width as f32, board_height as f32);
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for x in [0.0, width] {
            for y in [0.0, height] {
                for z in [0.0, MAX_HEIGHT] {
                    let point = shear(x, y, z);
                    min = min.min(point);
                    max = max.max(point);
                }
            }
        }

        let extent = max - min;
        let scale = if extent.x > 0.0 && extent.y > 0.0 {
            (area.w / extent.x).min(area.h / extent.y).max(0.0)
        } else {
            0.0
        };

        Self { scale, board_center: (min + max) * 0.5, screen_center: area.center() }
    }

    /// Screen pixels per board unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Maps a board-space point to screen space (y down).
    pub fn to_screen(&self, x: f32, y: f32, z: f32) -> Vec2 {
        let offset = (shear(x, y, z) - self.board_center) * self.scale;
        vec2(self.screen_center.x + offset.x, self.screen_center.y - offset.y)
    }
}
