//! Top-level frame layout: title bar, the active view, and a key hint line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::game::Lifecycle;
use crate::core::state::{View, ViewController};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AboutPanel, CatalogList, HomeMenu, SnakeBoard, TitleBar};

pub fn draw_ui(frame: &mut Frame, state: &ViewController, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, _, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(view_title(state).to_string(), status_message(state)).render(frame, title_area);

    let main_area = inset(main_area);
    match state.view {
        View::Home => {
            HomeMenu::new(state.menu(), state.menu_cursor, &state.content.quote)
                .render(frame, main_area);
        }
        View::About => AboutPanel::new(&state.content.about).render(frame, main_area),
        View::ListBrowse => CatalogList::new(
            &mut tui.catalog_list,
            state.content.catalog,
            state.browser.items(),
            state.browser.cursor(),
        )
        .render(frame, main_area),
        View::Game => {
            if let Some(engine) = state.game.as_ref() {
                SnakeBoard::new(engine).render(frame, main_area);
            }
        }
    }

    let help = Line::from(Span::styled(
        help_text(state),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(help, inset(help_area));
}

/// Two columns of left margin, matching the title bar indent.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(2).min(area.right()),
        width: area.width.saturating_sub(2),
        ..area
    }
}

fn view_title(state: &ViewController) -> &'static str {
    match state.view {
        View::Home => "Home",
        View::About => "About",
        View::ListBrowse => state.content.catalog.label(),
        View::Game => "Snake",
    }
}

fn status_message(state: &ViewController) -> String {
    match (state.view, state.game.as_ref()) {
        (View::Game, Some(engine)) => format!(
            "Score {} · Best {}",
            engine.score(),
            engine.high_score()
        ),
        _ => String::new(),
    }
}

fn help_text(state: &ViewController) -> &'static str {
    match state.view {
        View::Home => "↑↓ / j k to move  •  enter to select  •  q to quit",
        View::About => "esc / q to go back",
        View::ListBrowse => "↑↓ / j k to browse  •  esc to go back",
        View::Game => match state.game.as_ref().map(|g| g.lifecycle()) {
            Some(Lifecycle::GameOver) => "enter to restart  •  esc to go back",
            _ => "arrows / wasd / hjkl to steer  •  esc to go back to menu",
        },
    }
}
