//! # About Component
//!
//! Read-only welcome page: headline, labelled sections and a links box.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::content::AboutPage;
use crate::tui::component::Component;

pub struct AboutPanel<'a> {
    pub page: &'a AboutPage,
}

impl<'a> AboutPanel<'a> {
    pub fn new(page: &'a AboutPage) -> Self {
        Self { page }
    }

    fn body_lines(&self) -> Vec<Line<'a>> {
        let label = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(
                self.page.headline.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for (heading, body) in &self.page.sections {
            lines.push(Line::from(Span::styled(format!("{heading}:"), label)));
            lines.push(Line::from(body.as_str()));
            lines.push(Line::default());
        }
        lines.pop();
        lines
    }

    fn link_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            "Find me:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(self.page.links.iter().map(|(name, target)| {
            Line::from(vec![
                Span::styled(format!("{name:<10}"), Style::default().fg(Color::Cyan)),
                Span::raw("  "),
                Span::raw(target.as_str()),
            ])
        }));
        lines
    }
}

fn boxed(title: &str) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .title(title)
        .padding(Padding::horizontal(2))
}

impl Component for AboutPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let links = self.link_lines();
        let [body_area, links_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(links.len() as u16 + 2),
        ])
        .areas(area);

        let body = Paragraph::new(self.body_lines())
            .block(boxed(" 👋 About & Welcome "))
            .wrap(Wrap { trim: true });
        frame.render_widget(body, body_area);
        frame.render_widget(Paragraph::new(links).block(boxed(" Links ")), links_area);
    }
}
