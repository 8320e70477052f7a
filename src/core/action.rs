//! # Actions
//!
//! Everything the user can do to a screen becomes an `Action`.
//! Arrow up? That's `Action::Up`. Enter? `Action::Confirm`.
//!
//! Screens interpret actions themselves: `Back` on a screen with an open
//! dialog closes the dialog, otherwise it asks the navigator to pop.
//!
//! ```text
//! key  →  TuiEvent  →  Action  →  screen.handle(action)  →  NavCommand?
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Confirm,
    Back,
    /// Re-issue the screen's requests.
    Reload,
}
