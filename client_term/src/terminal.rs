//! Terminal front end: raw-mode keyboard polling and ratatui rendering

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use game_core::{GameStateSnapshot, InputSnapshot, Presentation};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::draw::{draw_banner, draw_field};
use crate::input::{map_key, HeldKeys, KeyAction, FALLBACK_HOLD};

/// Owns the terminal for the lifetime of the game
pub struct TerminalPresentation {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    keys: HeldKeys,
    enhanced: bool,
    quit_requested: bool,
    last_frame: Option<GameStateSnapshot>,
    restored: bool,
}

impl TerminalPresentation {
    /// Switch to raw mode on the alternate screen
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        // Key release events make held keys exact; otherwise fall back to a timeout
        let enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        } else {
            warn!(
                hold_ms = FALLBACK_HOLD.as_millis() as u64,
                "terminal does not report key releases, using timed holds"
            );
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        info!(enhanced, "terminal ready");

        Ok(Self {
            terminal,
            keys: HeldKeys::new((!enhanced).then_some(FALLBACK_HOLD)),
            enhanced,
            quit_requested: false,
            last_frame: None,
            restored: false,
        })
    }

    /// Give the terminal back to the shell. Safe to call more than once.
    ///
    /// Every step is attempted even if an earlier one fails; the first error
    /// is returned and a later call retries.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }

        let steps = [
            if self.enhanced {
                execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags)
            } else {
                Ok(())
            },
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen),
            disable_raw_mode(),
            self.terminal.show_cursor(),
        ];
        first_error(steps)?;

        self.restored = true;
        Ok(())
    }

    /// Drain every pending terminal event without blocking
    fn pump_events(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match map_key(&key) {
                    KeyAction::Hold(control) => self.keys.press(control, Instant::now()),
                    KeyAction::Release(control) => self.keys.release(control),
                    KeyAction::Quit => {
                        debug!("quit requested");
                        self.quit_requested = true;
                    }
                    KeyAction::Ignore => {}
                },
                // Releases may be lost while unfocused
                Event::FocusLost => self.keys.release_all(),
                _ => {}
            }
        }
        Ok(())
    }
}

/// Keep going past failures, reporting the first one
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps
        .into_iter()
        .fold(Ok(()), |first, step| first.and(step))
}

impl Presentation for TerminalPresentation {
    type Error = io::Error;

    fn poll_quit(&mut self) -> io::Result<bool> {
        self.pump_events()?;
        Ok(self.quit_requested)
    }

    fn poll_directions(&mut self) -> io::Result<InputSnapshot> {
        Ok(self.keys.snapshot(Instant::now()))
    }

    fn render(&mut self, snapshot: &GameStateSnapshot) -> io::Result<()> {
        self.last_frame = Some(*snapshot);
        self.terminal.draw(|frame| draw_field(frame, snapshot))?;
        Ok(())
    }

    fn render_banner(&mut self, text: &str) -> io::Result<()> {
        let last_frame = self.last_frame;
        self.terminal.draw(|frame| {
            if let Some(snapshot) = &last_frame {
                draw_field(frame, snapshot);
            }
            draw_banner(frame, text);
        })?;
        Ok(())
    }
}

impl Drop for TerminalPresentation {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let err = first_error([
            Ok(()),
            Err(io::Error::other("pop flags")),
            Err(io::Error::other("leave screen")),
            Ok(()),
        ])
        .expect_err("a step failed");
        assert_eq!(err.to_string(), "pop flags");
    }

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }
}
