//! Main application for the Tic-Tac-Toe GUI

use std::time::Instant;

use eframe::egui;
use egui::{Align2, CentralPanel, Context, CornerRadius, Frame, RichText, TextEdit, TopBottomPanel};
use tracing::{debug, info};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::{Clock, Config, Mark, PlayerNames};

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    clock: Clock,
}

impl TicTacToeApp {
    /// Create the app from parsed configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        Self::from_config(config)
    }

    /// Build without a window (also used by `new`)
    pub fn from_config(config: &Config) -> Self {
        let names = PlayerNames::new(config.player_x.clone(), config.player_o.clone());
        info!(interval = ?config.clock_interval(), "starting app");
        Self {
            state: GameState::new(names),
            board_view: BoardView::default(),
            clock: Clock::new(config.clock_interval(), Instant::now()),
        }
    }

    /// Render the header: title, name fields, clock and score
    fn render_header(&mut self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(Frame::new().fill(WINDOW_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("TIC TAC TOE").size(TITLE_SIZE).strong().color(TITLE));
                });
                ui.add_space(12.0);

                ui.columns(2, |cols| {
                    self.render_name_field(&mut cols[0], Mark::X);
                    cols[1].label(
                        RichText::new(self.clock.text()).size(CLOCK_SIZE).color(TEXT_PRIMARY),
                    );
                    self.render_name_field(&mut cols[0], Mark::O);
                    cols[1].label(
                        RichText::new(self.state.score_text()).size(SCORE_SIZE).color(SCORE),
                    );
                });

                if let Some(msg) = &self.state.message {
                    ui.label(RichText::new(format!("⚠ {}", msg)).color(TEXT_WARNING));
                }
            });
    }

    /// Single "Player X: [____]" row
    fn render_name_field(&mut self, ui: &mut egui::Ui, mark: Mark) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Player {}:", mark))
                    .size(LABEL_SIZE)
                    .color(TEXT_PRIMARY),
            );
            let field = TextEdit::singleline(self.state.names.raw_mut(mark))
                .hint_text(crate::players::default_name(mark))
                .text_color(mark_color(mark))
                .desired_width(250.0);
            ui.add(field);
        });
    }

    /// Render the restart bar
    fn render_footer(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("footer")
            .frame(Frame::new().fill(WINDOW_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let button = egui::Button::new(
                        RichText::new("Restart Game").size(18.0).color(TEXT_PRIMARY),
                    )
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(4))
                    .min_size(egui::vec2(190.0, 40.0));
                    if ui.add(button).clicked() {
                        debug!("restart clicked");
                        self.state.restart();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(WINDOW_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{} to move", self.state.current_player_name()))
                            .size(LABEL_SIZE)
                            .color(mark_color(self.state.engine.turn())),
                    );
                    ui.add_space(8.0);

                    let clicked = self.board_view.show(
                        ui,
                        self.state.engine.board().cells(),
                        self.state.winning_line(),
                        self.state.accepts_input(),
                    );

                    // Errors are already logged and shown by the state
                    if let Some(idx) = clicked {
                        let _ = self.state.click_cell(idx);
                    }
                });
            });
    }

    /// Modal Game Over dialog
    fn render_announcement(&mut self, ctx: &Context) {
        let Some(announcement) = &self.state.announcement else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new(announcement.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&announcement.message).size(SCORE_SIZE).strong());
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.state.acknowledge();
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // Name fields take keyboard input first
        if ctx.wants_keyboard_input() {
            return;
        }

        const DIGITS: [egui::Key; 9] = [
            egui::Key::Num1,
            egui::Key::Num2,
            egui::Key::Num3,
            egui::Key::Num4,
            egui::Key::Num5,
            egui::Key::Num6,
            egui::Key::Num7,
            egui::Key::Num8,
            egui::Key::Num9,
        ];

        let (restart, digit) = ctx.input(|i| {
            let restart = i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::R);
            let digit = DIGITS.iter().position(|&k| i.key_pressed(k));
            (restart, digit)
        });

        if restart {
            self.state.restart();
        }
        if let Some(idx) = digit {
            let _ = self.state.click_cell(idx);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Clock ticks drive repaints while idle
        if let Some(wait) = self.clock.poll(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        self.render_header(ctx);
        self.render_footer(ctx);
        self.render_board(ctx);
        self.render_announcement(ctx);
    }
}

impl Drop for TicTacToeApp {
    fn drop(&mut self) {
        self.clock.cancel();
        info!(score = %self.state.engine.scoreboard(), "app closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_seeds_names() {
        let config = Config {
            player_x: "Alice".to_string(),
            ..Config::default()
        };
        let app = TicTacToeApp::from_config(&config);
        assert_eq!(app.state.names.label(Mark::X), "Alice");
        assert_eq!(app.state.names.label(Mark::O), "Player O");
        assert!(app.clock.is_running());
        assert_eq!(app.clock.interval(), config.clock_interval());
    }
}
