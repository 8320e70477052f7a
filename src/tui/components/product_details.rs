//! # Product Details View
//!
//! Header with name and price, the dietary warning when it applies, and the
//! ingredient list. Restricted ingredients are drawn in red; rows the last
//! load added or changed are bold until the next load leaves them alone.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};

use crate::core::screens::ProductDetailsScreen;
use crate::tui::component::Component;

pub struct ProductDetailsView<'a> {
    screen: &'a ProductDetailsScreen,
}

impl<'a> ProductDetailsView<'a> {
    pub fn new(screen: &'a ProductDetailsScreen) -> Self {
        Self { screen }
    }

    fn header(&self) -> Vec<Line<'a>> {
        let name = self.screen.name.as_deref().unwrap_or("…");
        let price = self
            .screen
            .price
            .as_deref()
            .map(|p| format!("$ {p}"))
            .unwrap_or_default();

        let mut lines = vec![Line::from(vec![
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(price, Style::default().fg(Color::Green)),
        ])];
        if let Some(description) = &self.screen.description {
            lines.push(Line::from(Span::styled(
                description.as_str(),
                Style::default().fg(Color::Gray),
            )));
        }
        if self.screen.show_restriction_alert {
            lines.push(Line::from(Span::styled(
                "⚠ Contains ingredients you should avoid",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        lines
    }
}

impl Component for ProductDetailsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = self.header();
        let header_height = header.len() as u16 + 2;
        let [header_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(header)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title(" Product ")),
            header_area,
        );

        let items: Vec<ListItem> = self
            .screen
            .details
            .items()
            .iter()
            .enumerate()
            .map(|(index, detail)| {
                let mut style = Style::default();
                if self.screen.details.is_touched(index) {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if detail.is_restricted {
                    ListItem::new(format!("✗ {}", detail.name)).style(style.fg(Color::Red))
                } else {
                    ListItem::new(format!("  {}", detail.name)).style(style)
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title(" Ingredients "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ListState::default();
        if !self.screen.details.is_empty() {
            state.select(Some(self.screen.selected));
        }
        frame.render_stateful_widget(list, list_area, &mut state);

        frame.render_widget(
            Line::from(" Enter Add to cart  r Reload  Esc Back ")
                .style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}
