use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::navigation::Route;
use crate::core::screens::AppScreen;
use crate::tui::component::Component;
use crate::tui::components::{
    AddressView, Dialog, HomeView, PlaceholderView, ProductDetailsView, TitleBar,
};

/// Draws the visible screen, its title bar and any open dialog.
pub fn draw_ui(frame: &mut Frame, route: &Route, screen: &AppScreen, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar::new(route.title(), screen.is_loading(), spinner_frame).render(frame, title_area);

    match screen {
        AppScreen::Home(s) => HomeView::new(s).render(frame, main_area),
        AppScreen::ProductDetails(s) => ProductDetailsView::new(s).render(frame, main_area),
        AppScreen::Address(s) => AddressView::new(s).render(frame, main_area),
        AppScreen::Placeholder(s) => PlaceholderView::new(s).render(frame, main_area),
    }

    if let Some(overlay) = screen.overlay() {
        Dialog::new(overlay).render(frame, main_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Product};
    use crate::core::screens::{Action, ProductDetailsScreen};
    use crate::test_support::{StubCatalog, id, ingredient, nav_channel};
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;
    use std::time::Duration;

    async fn loaded(catalog: StubCatalog) -> ProductDetailsScreen {
        let mut screen = ProductDetailsScreen::new(id("p1"), catalog.shared(), nav_channel().0);
        while screen.is_loading() {
            screen.poll();
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        screen
    }

    fn draw(route: &Route, screen: &AppScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, route, screen, 0)).unwrap();
        buffer_text(terminal.backend())
    }

    #[tokio::test]
    async fn test_product_details_draws_name_price_and_warning() {
        let screen = loaded(StubCatalog {
            product: Some(Ok(Product {
                id: Some(id("p1")),
                name: Some("Burger".into()),
                price: Some(12.5),
                description: None,
            })),
            ingredients: Some(Ok(vec![ingredient("Pepper", true)])),
            ..Default::default()
        })
        .await;

        let text = draw(&Route::ProductDetails(id("p1")), &AppScreen::ProductDetails(screen));
        assert!(text.contains("Product details"));
        assert!(text.contains("Burger"));
        assert!(text.contains("12.5"));
        assert!(text.contains("Pepper"));
        assert!(text.contains("avoid"));
    }

    /// Whether the first cell of `word` on screen is drawn bold.
    fn is_bold(route: &Route, screen: &AppScreen, word: &str) -> bool {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, route, screen, 0)).unwrap();

        let cells = terminal.backend().buffer().content();
        let letters: Vec<String> = word.chars().map(String::from).collect();
        let start = cells
            .windows(letters.len())
            .position(|window| {
                window
                    .iter()
                    .zip(&letters)
                    .all(|(cell, letter)| cell.symbol() == letter.as_str())
            })
            .unwrap();
        cells[start].modifier.contains(Modifier::BOLD)
    }

    #[tokio::test]
    async fn test_changed_rows_are_bold_until_an_unchanged_reload() {
        let screen = loaded(StubCatalog {
            product: Some(Ok(Product {
                id: Some(id("p1")),
                name: Some("Burger".into()),
                price: Some(12.5),
                description: None,
            })),
            ingredients: Some(Ok(vec![ingredient("Bread", false), ingredient("Pepper", true)])),
            ..Default::default()
        })
        .await;
        let route = Route::ProductDetails(id("p1"));
        let mut screen = AppScreen::ProductDetails(screen);
        assert!(is_bold(&route, &screen, "Pepper"));

        screen.handle(Action::Reload);
        while screen.is_loading() {
            screen.poll();
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        assert!(!is_bold(&route, &screen, "Pepper"));
    }

    #[tokio::test]
    async fn test_failure_draws_alert_dialog() {
        let screen = loaded(StubCatalog {
            product: Some(Err(ApiError::Network("connection refused".into()))),
            ingredients: Some(Ok(vec![])),
            ..Default::default()
        })
        .await;

        let text = draw(&Route::ProductDetails(id("p1")), &AppScreen::ProductDetails(screen));
        assert!(text.contains("No connection"));
    }

    #[tokio::test]
    async fn test_dismissed_dialog_is_not_drawn() {
        let mut screen = loaded(StubCatalog {
            product: Some(Err(ApiError::Network("connection refused".into()))),
            ingredients: Some(Ok(vec![])),
            ..Default::default()
        })
        .await;
        screen.handle(Action::Confirm);

        let text = draw(&Route::ProductDetails(id("p1")), &AppScreen::ProductDetails(screen));
        assert!(!text.contains("No connection"));
    }
}
