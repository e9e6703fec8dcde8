//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Window background - deep navy
pub const WINDOW_BG: Color32 = Color32::from_rgb(22, 33, 62);

// Board colors
pub const BOARD_BG: Color32 = Color32::BLACK;
pub const CELL_EMPTY: Color32 = Color32::from_rgb(15, 52, 96); // #0F3460
pub const CELL_HOVER: Color32 = Color32::from_rgb(22, 33, 62); // #16213E
pub const CELL_FILLED: Color32 = Color32::from_rgb(26, 26, 46); // #1A1A2E

// Marks - neon
pub const MARK_X: Color32 = Color32::from_rgb(0, 240, 255); // #00F0FF
pub const MARK_O: Color32 = Color32::from_rgb(255, 0, 80); // #FF0050
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(0, 255, 0);

// Header text
pub const TITLE: Color32 = Color32::from_rgb(255, 215, 0); // #FFD700
pub const SCORE: Color32 = Color32::from_rgb(0, 255, 0); // #00FF00
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Restart button
pub const BUTTON_BG: Color32 = Color32::from_rgb(30, 60, 220);

// Sizes
pub const TITLE_SIZE: f32 = 50.0;
pub const LABEL_SIZE: f32 = 20.0;
pub const CLOCK_SIZE: f32 = 15.0;
pub const SCORE_SIZE: f32 = 24.0;
pub const MARK_SIZE: f32 = 56.0;
pub const CELL_GAP: f32 = 15.0;
pub const BOARD_MAX: f32 = 520.0;
pub const CELL_ROUNDING: u8 = 6;
pub const WIN_STROKE: f32 = 4.0;

/// Color for a placed mark
pub fn mark_color(mark: crate::Mark) -> Color32 {
    match mark {
        crate::Mark::X => MARK_X,
        crate::Mark::O => MARK_O,
    }
}
