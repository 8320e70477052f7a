//! # Screens
//!
//! Screen state lives here, away from any terminal code. A screen owns its
//! in-flight requests, turns results into display fields, and reacts to
//! [`Action`]s. Drawing is the TUI's job.
//!
//! ```text
//!   Route ──▶ ScreenBuilder::build ──▶ AppScreen ──▶ tui::components::*
//! ```

mod address;
mod home;
mod placeholder;
mod product_details;

use std::sync::Arc;

pub use crate::core::action::Action;
pub use address::{AddressLine, AddressScreen};
pub use home::HomeScreen;
pub use placeholder::PlaceholderScreen;
pub use product_details::{ProductDetail, ProductDetailsScreen};

use crate::api::{Catalog, ResourceId};
use crate::core::navigation::{NavHandle, Route, ScreenFactory};
use crate::core::overlay::Overlay;

/// Routes `action` to the open overlay, if there is one.
///
/// Returns true when the overlay consumed the action. Confirm and Back
/// dismiss it; anything else is swallowed while it stays up.
pub(crate) fn dismiss_overlay(overlay: &mut Option<Overlay>, action: Action) -> bool {
    if overlay.is_none() {
        return false;
    }
    if matches!(action, Action::Confirm | Action::Back)
        && let Some(open) = overlay.take()
    {
        open.dismiss();
    }
    true
}

pub enum AppScreen {
    Home(HomeScreen),
    ProductDetails(ProductDetailsScreen),
    Address(AddressScreen),
    Placeholder(PlaceholderScreen),
}

impl AppScreen {
    pub fn handle(&mut self, action: Action) {
        match self {
            AppScreen::Home(s) => s.handle(action),
            AppScreen::ProductDetails(s) => s.handle(action),
            AppScreen::Address(s) => s.handle(action),
            AppScreen::Placeholder(s) => s.handle(action),
        }
    }

    /// Applies any settled requests. Returns true if a redraw is needed.
    pub fn poll(&mut self) -> bool {
        match self {
            AppScreen::ProductDetails(s) => s.poll(),
            AppScreen::Address(s) => s.poll(),
            AppScreen::Home(_) | AppScreen::Placeholder(_) => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            AppScreen::ProductDetails(s) => s.is_loading(),
            AppScreen::Address(s) => s.is_loading(),
            AppScreen::Home(_) | AppScreen::Placeholder(_) => false,
        }
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        match self {
            AppScreen::ProductDetails(s) => s.overlay.as_ref(),
            AppScreen::Address(s) => s.overlay.as_ref(),
            AppScreen::Home(_) | AppScreen::Placeholder(_) => None,
        }
    }
}

/// Builds live screens backed by a shared [`Catalog`].
#[derive(Clone)]
pub struct ScreenBuilder {
    catalog: Arc<dyn Catalog>,
    featured_product: ResourceId,
}

impl ScreenBuilder {
    pub fn new(catalog: Arc<dyn Catalog>, featured_product: ResourceId) -> Self {
        Self {
            catalog,
            featured_product,
        }
    }
}

impl ScreenFactory<AppScreen> for ScreenBuilder {
    fn build(&self, route: &Route, nav: NavHandle) -> AppScreen {
        match route {
            Route::Home => AppScreen::Home(HomeScreen::new(nav, self.featured_product.clone())),
            Route::ProductDetails(id) => AppScreen::ProductDetails(ProductDetailsScreen::new(
                id.clone(),
                self.catalog.clone(),
                nav,
            )),
            Route::Address => AppScreen::Address(AddressScreen::new(self.catalog.clone(), nav)),
            Route::Cart => AppScreen::Placeholder(PlaceholderScreen::new(nav, "Your cart is empty.")),
            Route::Profile => AppScreen::Placeholder(PlaceholderScreen::new(nav, "")),
        }
    }
}
