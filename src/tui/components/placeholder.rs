use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::screens::PlaceholderScreen;
use crate::tui::component::Component;

pub struct PlaceholderView<'a> {
    screen: &'a PlaceholderScreen,
}

impl<'a> PlaceholderView<'a> {
    pub fn new(screen: &'a PlaceholderScreen) -> Self {
        Self { screen }
    }
}

impl Component for PlaceholderView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new(self.screen.message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::bordered().title_bottom(" Esc Back ")),
            area,
        );
    }
}
