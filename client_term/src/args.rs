//! Command line parsing

use std::path::PathBuf;

use clap::Parser;
use game_core::{Config, Params};

/// Ping n Pong! Two players, one keyboard.
///
/// W / S move the left paddle, Up / Down the right; Esc, q or Ctrl-C quit.
#[derive(Parser, Debug)]
#[command(name = "ping-pong", version)]
pub struct Cli {
    /// Points needed to win a match
    #[arg(long, default_value_t = Params::WIN_SCORE)]
    pub win_score: u8,

    /// Frame rate cap
    #[arg(long, default_value_t = Params::TARGET_FPS)]
    pub fps: u32,

    /// Pause after a win, in milliseconds
    #[arg(long, default_value_t = Params::WIN_DELAY_MS)]
    pub win_delay_ms: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// Game configuration with the command line overrides applied
    pub fn config(&self) -> Config {
        Config {
            win_score: self.win_score,
            target_fps: self.fps,
            win_delay_ms: self.win_delay_ms,
            ..Config::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ping-pong").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).expect("empty args parse");
        let config = cli.config();
        assert_eq!(config.win_score, 10);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.win_delay_ms, 5000);
        assert!(cli.log.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&[
            "--win-score",
            "3",
            "--fps",
            "30",
            "--win-delay-ms",
            "250",
            "--log",
            "pong.log",
        ])
        .expect("valid args parse");
        let config = cli.config();
        assert_eq!(config.win_score, 3);
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.win_delay_ms, 250);
        assert_eq!(config.screen_width, Config::new().screen_width);
        assert_eq!(cli.log, Some(PathBuf::from("pong.log")));
    }

    #[test]
    fn test_help_flag() {
        let err = parse(&["--help"]).expect_err("help short-circuits");
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--win-score"));
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["--fps"]).expect_err("value required");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_bad_number() {
        let err = parse(&["--win-score", "ten"]).expect_err("not a number");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--ai"]).expect_err("unknown flag");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
