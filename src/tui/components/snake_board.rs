//! # Snake Board Component
//!
//! Draws the board, a stats panel beside it and, once the round is over,
//! a centered game-over box on top.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::game::{Cell, EndReason, GameEngine, Lifecycle};
use crate::tui::component::Component;
use crate::tui::components::centered_fixed;

const STATS_WIDTH: u16 = 20;
const HEAD: &str = "●";
const BODY: &str = "○";
const FOOD: &str = "❤";

pub struct SnakeBoard<'a> {
    pub engine: &'a GameEngine,
}

impl<'a> SnakeBoard<'a> {
    pub fn new(engine: &'a GameEngine) -> Self {
        Self { engine }
    }

    fn board_lines(&self) -> Vec<Line<'static>> {
        let (width, height) = self.engine.board_size();
        let snake = self.engine.snake();
        let head = self.engine.head();
        let food = self.engine.food();

        (0..i32::from(height))
            .map(|y| {
                let spans: Vec<Span> = (0..i32::from(width))
                    .map(|x| {
                        let cell = Cell::new(x, y);
                        if cell == head {
                            Span::styled(
                                HEAD,
                                Style::default()
                                    .fg(Color::Green)
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else if snake.contains(&cell) {
                            Span::styled(BODY, Style::default().fg(Color::Cyan))
                        } else if cell == food {
                            Span::styled(FOOD, Style::default().fg(Color::Red))
                        } else {
                            Span::raw(" ")
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn stats_lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        let value = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        vec![
            Line::from(Span::styled("🐍 SNAKE", value(Color::Yellow))),
            Line::default(),
            Line::from(Span::styled("SCORE", label)),
            Line::from(Span::styled(
                format!(" {}", self.engine.score()),
                value(Color::Magenta),
            )),
            Line::default(),
            Line::from(Span::styled("HIGH SCORE", label)),
            Line::from(Span::styled(
                format!(" {}", self.engine.high_score()),
                value(Color::Yellow),
            )),
            Line::default(),
            Line::from(Span::styled("w a s d", label)),
            Line::from(Span::styled("↑ ↓ ← →", label)),
            Line::from(Span::styled("h j k l", label)),
        ]
    }

    fn game_over_lines(&self) -> Vec<Line<'static>> {
        let headline = match self.engine.end_reason() {
            Some(EndReason::BoardFull) => "🏆 BOARD CLEARED",
            _ => "💀 GAME OVER",
        };
        vec![
            Line::from(Span::styled(
                headline,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(vec![
                Span::raw("Final Score: "),
                Span::styled(
                    self.engine.score().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
            .centered(),
            Line::from(Span::styled(
                "enter to restart • esc to go back",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ]
    }
}

impl Component for SnakeBoard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (width, height) = self.engine.board_size();
        // Board plus its border.
        let board_w = width.saturating_add(2);
        let board_h = height.saturating_add(2);
        let needed_w = board_w.saturating_add(STATS_WIDTH + 2);

        if area.width < needed_w || area.height < board_h {
            let message = format!("Terminal too small (need {}x{})", needed_w, board_h);
            let warning = Paragraph::new(message)
                .style(Style::default().fg(Color::Yellow))
                .centered();
            frame.render_widget(warning, centered_fixed(area.width, 1, area));
            return;
        }

        let [row] = Layout::vertical([Constraint::Length(board_h)])
            .flex(Flex::Center)
            .areas(area);
        let [board_area, _, stats_area] = Layout::horizontal([
            Constraint::Length(board_w),
            Constraint::Length(2),
            Constraint::Length(STATS_WIDTH),
        ])
        .flex(Flex::Center)
        .areas(row);

        let board = Paragraph::new(self.board_lines()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(board, board_area);

        let stats = Paragraph::new(self.stats_lines()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(stats, stats_area);

        if self.engine.lifecycle() == Lifecycle::GameOver {
            let overlay = centered_fixed(40, 5, board_area);
            frame.render_widget(Clear, overlay);
            let box_ = Paragraph::new(self.game_over_lines()).block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Red)),
            );
            frame.render_widget(box_, overlay);
        }
    }
}
