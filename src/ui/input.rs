//! Terminal input mapping.
//!
//! Keys and mouse presses collapse into a handful of UI actions; the
//! simulation only ever sees the [`GameInput`] they carry.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use flappy_nano::game::GameInput;

/// What a terminal event asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Forward to the simulation.
    Game(GameInput),
    /// Show the share message (only meaningful once ended).
    Share,
    Quit,
    None,
}

/// Map any terminal event.
pub fn map_event(event: &Event) -> UiAction {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => UiAction::None,
    }
}

/// Space / Up / k flap, Enter starts, r retries, s shares, q / Esc / Ctrl-C quit.
pub fn map_key(key: &KeyEvent) -> UiAction {
    // Releases show up on some platforms; only presses and repeats count
    if key.kind == KeyEventKind::Release {
        return UiAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return UiAction::Quit;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') => UiAction::Game(GameInput::Flap),
        KeyCode::Enter => UiAction::Game(GameInput::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => UiAction::Game(GameInput::Retry),
        KeyCode::Char('s') | KeyCode::Char('S') => UiAction::Share,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => UiAction::Quit,
        _ => UiAction::None,
    }
}

/// A left-button press anywhere flaps.
pub fn map_mouse(mouse: &MouseEvent) -> UiAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => UiAction::Game(GameInput::Flap),
        _ => UiAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_flap_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('k')] {
            assert_eq!(map_key(&key(code)), UiAction::Game(GameInput::Flap));
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            map_key(&key(KeyCode::Enter)),
            UiAction::Game(GameInput::Start)
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('r'))),
            UiAction::Game(GameInput::Retry)
        );
        assert_eq!(map_key(&key(KeyCode::Char('s'))), UiAction::Share);
        assert_eq!(map_key(&key(KeyCode::Esc)), UiAction::Quit);
        assert_eq!(map_key(&key(KeyCode::Char('x'))), UiAction::None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&event), UiAction::Quit);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut event = key(KeyCode::Char(' '));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(&event), UiAction::None);
    }

    #[test]
    fn test_mouse_press_flaps() {
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse(&press), UiAction::Game(GameInput::Flap));

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..press
        };
        assert_eq!(map_mouse(&release), UiAction::None);
        assert_eq!(map_event(&Event::Mouse(press)), UiAction::Game(GameInput::Flap));
    }
}
