//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component is props-based: it borrows what it draws for one frame
//! and owns nothing. Screen views wrap a `&Screen` from `core::screens`;
//! `TitleBar` and `Dialog` take plain values.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ProductDetailsView::new(&screen).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! ProductDetailsView::render(frame, area); // reads from the navigator
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── dialog.rs           (Overlay dialog)
//! ├── home.rs             (Menu)
//! ├── product_details.rs  (Product + ingredients)
//! ├── address.rs          (Saved addresses)
//! └── placeholder.rs      (Cart, profile)
//! ```

mod address;
mod dialog;
mod home;
mod placeholder;
mod product_details;
mod title_bar;

pub use address::AddressView;
pub use dialog::Dialog;
pub use home::HomeView;
pub use placeholder::PlaceholderView;
pub use product_details::ProductDetailsView;
pub use title_bar::TitleBar;

/// Flattens a test backend's buffer into one string.
#[cfg(test)]
pub(crate) fn buffer_text(backend: &ratatui::backend::TestBackend) -> String {
    backend
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
