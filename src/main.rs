//! Tic-Tac-Toe GUI
//!
//! A graphical interface for two players sharing one screen.

use clap::Parser;
use tictactoe::ui::TicTacToeApp;
use tictactoe::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_resizable(false)
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )
}
