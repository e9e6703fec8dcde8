//! Command-line configuration.

use clap::Parser;
use std::time::Duration;

/// Two-player Tic-Tac-Toe with a running scoreboard
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tictactoe")]
#[command(about = "Two-player Tic-Tac-Toe desktop game", long_about = None)]
#[command(version)]
pub struct Config {
    /// Initial text of the Player X name field
    #[arg(long, env = "TICTACTOE_PLAYER_X", default_value = "")]
    pub player_x: String,

    /// Initial text of the Player O name field
    #[arg(long, env = "TICTACTOE_PLAYER_O", default_value = "")]
    pub player_o: String,

    /// Window width in points
    #[arg(long, default_value_t = 1000.0)]
    pub width: f32,

    /// Window height in points
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    /// Clock refresh interval in milliseconds
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub clock_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_x: String::new(),
            player_o: String::new(),
            width: 1000.0,
            height: 800.0,
            clock_interval_ms: 1000,
        }
    }
}

impl Config {
    #[inline]
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    #[inline]
    pub fn window_size(&self) -> [f32; 2] {
        [self.width, self.height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(config.width, 1000.0);
        assert_eq!(config.height, 800.0);
        assert_eq!(config.clock_interval(), Duration::from_secs(1));
        assert_eq!(config.window_size(), Config::default().window_size());
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "tictactoe",
            "--player-x",
            "Alice",
            "--player-o",
            "Bob",
            "--clock-interval-ms",
            "250",
        ])
        .unwrap();
        assert_eq!(config.player_x, "Alice");
        assert_eq!(config.player_o, "Bob");
        assert_eq!(config.clock_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Config::try_parse_from(["tictactoe", "--clock-interval-ms", "0"]).is_err());
    }
}
