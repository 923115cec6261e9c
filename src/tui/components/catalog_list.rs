//! # Catalog List Component
//!
//! Scrollable cards for the browsed records (projects or servers).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CatalogListState` lives in `TuiState` and only tracks scrolling
//! - `CatalogList` is created each frame with borrowed props
//!
//! The highlighted index comes from the core `ListBrowser`; this component
//! just keeps it on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::content::{Catalog, Project, Record, Server};
use crate::tui::component::Component;
use crate::tui::components::truncate_str;

/// Rows per card: two borders plus content lines.
const PROJECT_CARD_HEIGHT: u16 = 6;
const SERVER_CARD_HEIGHT: u16 = 5;

pub struct CatalogListState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for keeping the selection visible)
    pub viewport_height: u16,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
        }
    }

    /// Scroll so the card spanning `top..bottom` is fully visible.
    pub fn reveal(&mut self, top: u16, bottom: u16) {
        let offset_y = self.scroll_state.offset().y;
        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y + self.viewport_height {
            let new_y = bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }
}

pub struct CatalogList<'a> {
    state: &'a mut CatalogListState,
    catalog: Catalog,
    records: &'a [Record],
    selected: usize,
}

impl<'a> CatalogList<'a> {
    pub fn new(
        state: &'a mut CatalogListState,
        catalog: Catalog,
        records: &'a [Record],
        selected: usize,
    ) -> Self {
        Self {
            state,
            catalog,
            records,
            selected,
        }
    }

    fn header_lines(&self) -> Vec<Line<'static>> {
        let (icon, subtitle) = match self.catalog {
            Catalog::Portfolio => ("🚀", "Things I've built, broken, and learned from."),
            Catalog::Servers => ("🖧", "SSH into the machines of the realm."),
        };
        let position = if self.records.is_empty() {
            String::new()
        } else {
            format!("  ({}/{})", self.selected + 1, self.records.len())
        };
        vec![
            Line::from(vec![
                Span::styled(
                    format!("{icon} {}", self.catalog.label()),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(position, Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(Span::styled(
                subtitle,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ]
    }
}

impl Component for CatalogList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        frame.render_widget(Paragraph::new(self.header_lines()), header_area);

        if self.records.is_empty() {
            let empty = Paragraph::new("Nothing here yet.")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, list_area);
            return;
        }

        // Leave a column for the scrollbar.
        let content_width = list_area.width.saturating_sub(1);
        let card_height = card_height(self.catalog);
        let total_height = card_height.saturating_mul(self.records.len() as u16);

        self.state.viewport_height = list_area.height;
        let top = card_height.saturating_mul(self.selected as u16);
        self.state.reveal(top, top.saturating_add(card_height));

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, record) in self.records.iter().enumerate() {
            let rect = Rect::new(0, card_height * i as u16, content_width, card_height);
            let is_selected = i == self.selected;
            let inner_width = content_width.saturating_sub(6) as usize;
            let card = match record {
                Record::Project(project) => project_card(project, is_selected, inner_width),
                Record::Server(server) => server_card(server, is_selected, inner_width),
            };
            scroll_view.render_widget(card, rect);
        }

        frame.render_stateful_widget(scroll_view, list_area, &mut self.state.scroll_state);
    }
}

fn card_height(catalog: Catalog) -> u16 {
    match catalog {
        Catalog::Portfolio => PROJECT_CARD_HEIGHT,
        Catalog::Servers => SERVER_CARD_HEIGHT,
    }
}

fn card_block(is_selected: bool) -> Block<'static> {
    let border = if is_selected {
        Color::Magenta
    } else {
        Color::DarkGray
    };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .padding(Padding::horizontal(2))
}

fn name_style(is_selected: bool) -> Style {
    let color = if is_selected { Color::Yellow } else { Color::Cyan };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn status_color(status: &str) -> Color {
    match status {
        "Live" => Color::Green,
        "In Progress" => Color::Cyan,
        "Ongoing" => Color::Yellow,
        _ => Color::DarkGray,
    }
}

fn project_card(project: &Project, is_selected: bool, width: usize) -> Paragraph<'static> {
    let badge = format!(" {} {} ", project.emoji, project.status)
        .trim_start()
        .to_string();
    let tech: Vec<Span> = project
        .tech
        .iter()
        .flat_map(|t| {
            [
                Span::styled(
                    format!(" {t} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect();

    let lines = vec![
        Line::from(vec![
            Span::styled(project.name.clone(), name_style(is_selected)),
            Span::raw("  "),
            Span::styled(
                badge,
                Style::default()
                    .fg(Color::Black)
                    .bg(status_color(&project.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(truncate_str(&project.description, width)),
        Line::from(vec![
            Span::styled("🔗 ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                truncate_str(&project.url, width.saturating_sub(3)),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(tech),
    ];
    Paragraph::new(lines).block(card_block(is_selected))
}

fn server_card(server: &Server, is_selected: bool, width: usize) -> Paragraph<'static> {
    let host_style = if is_selected {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let mut title = vec![Span::styled(
        format!("{} {}", server.icon, server.name).trim_start().to_string(),
        name_style(is_selected),
    )];
    if !server.tag.is_empty() {
        title.push(Span::raw("  "));
        title.push(Span::styled(
            format!(" {} ", server.tag),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ));
    }

    let lines = vec![
        Line::from(title),
        Line::from(Span::styled(truncate_str(&server.host, width), host_style)),
        Line::from(Span::styled(
            truncate_str(&server.description, width),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    Paragraph::new(lines).block(card_block(is_selected))
}
