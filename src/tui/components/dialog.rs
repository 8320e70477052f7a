//! # Dialog Component
//!
//! Centered overlay for a screen's open [`Overlay`]. Notices are neutral,
//! alerts are red. The help line matches what the screens accept.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::overlay::{Overlay, OverlayKind};
use crate::tui::component::Component;

pub struct Dialog<'a> {
    overlay: &'a Overlay,
}

impl<'a> Dialog<'a> {
    pub fn new(overlay: &'a Overlay) -> Self {
        Self { overlay }
    }
}

impl Component for Dialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dialog = centered_rect(60, 40, area);
        frame.render_widget(Clear, dialog);

        let accent = match self.overlay.kind() {
            OverlayKind::Notice => Color::Cyan,
            OverlayKind::Alert => Color::Red,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!(" {} ", self.overlay.title()))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(" Enter OK  Esc Close ").centered())
            .padding(Padding::uniform(1));

        let body = Paragraph::new(self.overlay.message())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, dialog);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
