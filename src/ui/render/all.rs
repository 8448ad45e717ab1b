use super::*;
use crate::state::{Section, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

/// Specify the height of the log panel when visible.
///
const LOG_HEIGHT: u16 = 10;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let background = Block::default().style(styling::background_style(state.get_theme()));
    frame.render_widget(background, size);

    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    tabs(frame, rows[0], state);
    match state.current_section() {
        Section::Contact => contact(frame, rows[1], state),
        other => section(frame, rows[1], state, other),
    }
    footer(frame, rows[2], state);
    if state.is_log_visible() {
        log(frame, rows[3], state);
    }
}
