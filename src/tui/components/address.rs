//! # Address View

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::screens::AddressScreen;
use crate::tui::component::Component;

pub struct AddressView<'a> {
    screen: &'a AddressScreen,
}

impl<'a> AddressView<'a> {
    pub fn new(screen: &'a AddressScreen) -> Self {
        Self { screen }
    }
}

impl Component for AddressView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [primary_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let primary = match (&self.screen.primary, self.screen.loaded) {
            (Some(name), _) => name.as_str(),
            (None, true) => "No saved addresses",
            (None, false) => "",
        };
        frame.render_widget(
            Paragraph::new(primary)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(Block::bordered().title(" Delivering to ")),
            primary_area,
        );

        let items: Vec<ListItem> = self
            .screen
            .addresses
            .items()
            .iter()
            .map(|line| {
                ListItem::new(vec![
                    Line::from(line.name.as_str()),
                    Line::from(format!("  {}", line.detail)).style(Style::default().fg(Color::Gray)),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title(" Saved addresses "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        if !self.screen.addresses.is_empty() {
            state.select(Some(self.screen.selected));
        }
        frame.render_stateful_widget(list, list_area, &mut state);
    }
}
