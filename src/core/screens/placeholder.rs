//! Screens with no content yet (cart, profile). They only know how to go back.

use crate::core::navigation::NavHandle;

use super::Action;

pub struct PlaceholderScreen {
    nav: NavHandle,
    pub message: &'static str,
}

impl PlaceholderScreen {
    pub fn new(nav: NavHandle, message: &'static str) -> Self {
        Self { nav, message }
    }

    pub fn handle(&mut self, action: Action) {
        if action == Action::Back {
            self.nav.back();
        }
    }
}
