use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::text::Span;

/// Frames cycled while a contact submission is in flight.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return the spinner frame for the current state.
///
pub fn widget(state: &State) -> Span<'static> {
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    Span::styled(frame, styling::banner_style(state.get_theme()))
}
