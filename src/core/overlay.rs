//! Ephemeral overlays (dialogs, alerts) shown above a screen.
//!
//! An overlay reports its own end to the navigation controller: explicit
//! [`Overlay::dismiss`] sends `dismissed: true`, a plain drop (its screen was
//! popped) sends `dismissed: false`. The controller decides what, if
//! anything, that means for navigation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::navigation::{NavCommand, NavHandle};

static NEXT_OVERLAY_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Informational dialog, e.g. "product added".
    Notice,
    /// A failure the user should see.
    Alert,
}

pub struct Overlay {
    id: OverlayId,
    kind: OverlayKind,
    title: String,
    message: String,
    nav: NavHandle,
    dismissed: bool,
}

impl Overlay {
    fn new(nav: &NavHandle, kind: OverlayKind, title: &str, message: &str) -> Self {
        Self {
            id: OverlayId(NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed)),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            nav: nav.clone(),
            dismissed: false,
        }
    }

    pub fn notice(nav: &NavHandle, title: &str, message: &str) -> Self {
        Self::new(nav, OverlayKind::Notice, title, message)
    }

    pub fn alert(nav: &NavHandle, title: &str, message: &str) -> Self {
        Self::new(nav, OverlayKind::Alert, title, message)
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Closes the overlay at the user's request.
    pub fn dismiss(mut self) {
        self.dismissed = true;
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.nav.send(NavCommand::OverlayClosed {
            overlay: self.id,
            dismissed: self.dismissed,
        });
    }
}

impl std::fmt::Debug for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .finish()
    }
}
