//! # TitleBar Component
//!
//! Top status bar: app name, current screen, and a spinner while the
//! visible screen has requests in flight.
//!
//! Purely presentational. It receives all data as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Product details", true, spinner_frame);
//! title_bar.render(frame, area);
//! ```
//!
//! 1. **Loading**: `"SafeEat | Product details | ⠙ Loading"`
//! 2. **Idle**: `"SafeEat | Product details"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub screen_title: String,
    pub loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(screen_title: impl Into<String>, loading: bool, spinner_frame: usize) -> Self {
        Self {
            screen_title: screen_title.into(),
            loading,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("SafeEat", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::raw(self.screen_title.as_str()),
        ];
        if self.loading {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{glyph} Loading"),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Route;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_idle() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let mut title_bar = TitleBar::new("Address", false, 0);

        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("SafeEat | Address"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn test_title_bar_home_names_the_screen() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let mut title_bar = TitleBar::new(Route::Home.title(), false, 0);

        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("SafeEat | Home"));
        assert!(!text.contains("SafeEat | SafeEat"));
    }

    #[test]
    fn test_title_bar_loading_shows_spinner() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let mut title_bar = TitleBar::new("Product details", true, 1);

        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("Product details"));
        assert!(text.contains("⠙ Loading"));
    }
}
