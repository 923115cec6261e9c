//! # Home Menu Component
//!
//! Banner, greeting quote and the navigation menu. The banner collapses to a
//! one-line title on narrow terminals.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::content::MenuEntry;
use crate::tui::component::Component;

const BANNER: &[&str] = &[
    "██████╗  ██████╗ ██████╗ ████████╗ █████╗ ██╗     ",
    "██╔══██╗██╔═══██╗██╔══██╗╚══██╔══╝██╔══██╗██║     ",
    "██████╔╝██║   ██║██████╔╝   ██║   ███████║██║     ",
    "██╔═══╝ ██║   ██║██╔══██╗   ██║   ██╔══██║██║     ",
    "██║     ╚██████╔╝██║  ██║   ██║   ██║  ██║███████╗",
    "╚═╝      ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚══════╝",
];

/// Minimum area width for the full banner.
const BANNER_MIN_WIDTH: u16 = 60;

pub struct HomeMenu<'a> {
    pub entries: &'a [MenuEntry],
    pub cursor: usize,
    pub quote: &'a str,
}

impl<'a> HomeMenu<'a> {
    pub fn new(entries: &'a [MenuEntry], cursor: usize, quote: &'a str) -> Self {
        Self {
            entries,
            cursor,
            quote,
        }
    }

    fn header_lines(&self, width: u16) -> Vec<Line<'a>> {
        let banner_style = Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = if width >= BANNER_MIN_WIDTH {
            BANNER
                .iter()
                .map(|row| Line::from(Span::styled(*row, banner_style)))
                .collect()
        } else {
            vec![Line::from(Span::styled("✦ portal ✦", banner_style))]
        };
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            self.quote,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
        )));
        lines
    }

    fn menu_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            "Navigate",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))];
        for (i, entry) in self.entries.iter().enumerate() {
            let label = format!("{}  {}", entry.icon, entry.label);
            if i == self.cursor {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("▸ {label}"),
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", entry.description),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ]));
            } else {
                lines.push(Line::from(Span::styled(
                    format!("  {label}"),
                    Style::default().fg(Color::White),
                )));
            }
        }
        lines
    }
}

impl Component for HomeMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = self.header_lines(area.width);
        let menu = self.menu_lines();

        let [header_area, _, menu_area] = Layout::vertical([
            Constraint::Length(header.len() as u16),
            Constraint::Length(1),
            Constraint::Length(menu.len() as u16),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(Paragraph::new(header).centered(), header_area);

        // Menu is left-aligned inside a centered column.
        let menu_width = menu.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let [menu_column] = Layout::horizontal([Constraint::Length(menu_width)])
            .flex(Flex::Center)
            .areas(menu_area);
        frame.render_widget(Paragraph::new(menu), menu_column);
    }
}
