use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a
/// `Frame` within a given `Rect`. Stateful components keep their
/// presentation state (scroll offsets) in `TuiState` and borrow it.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so stateful components can update their borrowed
    /// presentation state during the render pass.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
