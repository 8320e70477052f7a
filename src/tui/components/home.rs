//! # Home Menu View

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, List, ListState};

use crate::core::screens::HomeScreen;
use crate::tui::component::Component;

pub struct HomeView<'a> {
    screen: &'a HomeScreen,
}

impl<'a> HomeView<'a> {
    pub fn new(screen: &'a HomeScreen) -> Self {
        Self { screen }
    }
}

impl Component for HomeView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let list = List::new(self.screen.labels())
            .block(
                Block::bordered()
                    .title(" Menu ")
                    .title_bottom(" ↑↓ Move  Enter Open  Esc Quit "),
            )
            .highlight_symbol("› ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        let mut state = ListState::default().with_selected(Some(self.screen.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
