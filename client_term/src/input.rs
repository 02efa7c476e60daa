//! Keyboard input handling

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::InputSnapshot;

/// How long a press counts as held when the terminal never reports releases.
/// Long enough to bridge the gap before key auto-repeat kicks in.
pub const FALLBACK_HOLD: Duration = Duration::from_millis(300);

/// A paddle movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Control {
    const ALL: [Control; 4] = [
        Control::LeftUp,
        Control::LeftDown,
        Control::RightUp,
        Control::RightDown,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// What a key event means for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Hold(Control),
    Release(Control),
    Quit,
    Ignore,
}

/// Map a terminal key event: W/S for the left paddle, arrows for the right
pub fn map_key(event: &KeyEvent) -> KeyAction {
    let control = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            return quit_on_press(event.kind);
        }
        KeyCode::Esc | KeyCode::Char('q') => return quit_on_press(event.kind),
        KeyCode::Char('w') | KeyCode::Char('W') => Control::LeftUp,
        KeyCode::Char('s') | KeyCode::Char('S') => Control::LeftDown,
        KeyCode::Up => Control::RightUp,
        KeyCode::Down => Control::RightDown,
        _ => return KeyAction::Ignore,
    };

    match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => KeyAction::Hold(control),
        KeyEventKind::Release => KeyAction::Release(control),
    }
}

fn quit_on_press(kind: KeyEventKind) -> KeyAction {
    if kind == KeyEventKind::Press {
        KeyAction::Quit
    } else {
        KeyAction::Ignore
    }
}

/// Tracks which movement keys are currently down.
///
/// With release reporting a key is held from press to release. Without it
/// (`timeout` set) each press or repeat holds the key for `timeout`.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    pressed_at: [Option<Instant>; 4],
    timeout: Option<Duration>,
}

impl HeldKeys {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            pressed_at: [None; 4],
            timeout,
        }
    }

    pub fn press(&mut self, control: Control, now: Instant) {
        self.pressed_at[control.index()] = Some(now);
    }

    pub fn release(&mut self, control: Control) {
        self.pressed_at[control.index()] = None;
    }

    pub fn release_all(&mut self) {
        self.pressed_at = [None; 4];
    }

    pub fn is_held(&self, control: Control, now: Instant) -> bool {
        match (self.pressed_at[control.index()], self.timeout) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(at), Some(timeout)) => now.saturating_duration_since(at) < timeout,
        }
    }

    pub fn snapshot(&self, now: Instant) -> InputSnapshot {
        let [left_up, left_down, right_up, right_down] =
            Control::ALL.map(|control| self.is_held(control, now));
        InputSnapshot {
            left_up,
            left_down,
            right_up,
            right_down,
        }
    }
}
