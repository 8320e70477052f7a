use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Up,
    Down,
    Enter,
    Escape,
    Reload,
    ForceQuit, // Ctrl+C
    Resize,
}

impl TuiEvent {
    /// The screen action for this event. Quit and resize are handled by the loop.
    pub fn action(self) -> Option<Action> {
        match self {
            TuiEvent::Up => Some(Action::Up),
            TuiEvent::Down => Some(Action::Down),
            TuiEvent::Enter => Some(Action::Confirm),
            TuiEvent::Escape => Some(Action::Back),
            TuiEvent::Reload => Some(Action::Reload),
            TuiEvent::ForceQuit | TuiEvent::Resize => None,
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Up) => Some(TuiEvent::Up),
                (_, KeyCode::Down) => Some(TuiEvent::Down),
                (_, KeyCode::Enter) => Some(TuiEvent::Enter),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Char('r')) => Some(TuiEvent::Reload),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
