//! Landing menu. Each entry pushes one route.

use crate::api::ResourceId;
use crate::core::navigation::{NavHandle, Route};

use super::Action;

pub struct HomeScreen {
    nav: NavHandle,
    entries: Vec<(&'static str, Route)>,
    pub selected: usize,
}

impl HomeScreen {
    pub fn new(nav: NavHandle, featured_product: ResourceId) -> Self {
        Self {
            nav,
            entries: vec![
                ("Featured product", Route::ProductDetails(featured_product)),
                ("Delivery address", Route::Address),
                ("Cart", Route::Cart),
                ("Profile", Route::Profile),
            ],
            selected: 0,
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Up => self.selected = self.selected.saturating_sub(1),
            Action::Down => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            Action::Confirm => {
                if let Some((_, route)) = self.entries.get(self.selected) {
                    self.nav.navigate_to(route.clone());
                }
            }
            Action::Back => self.nav.back(),
            Action::Reload => {}
        }
    }
}
