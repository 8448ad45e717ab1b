use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const NAVIGATION_HINTS: &str =
    " tab/←→: sections, j/k: scroll, 1-7: jump, c: contact, t: theme, d: log, x: dismiss, q: quit";
const FORM_HINTS: &str =
    " tab/↑↓: fields, enter: next field or line, ctrl+s: send, esc: back";

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, hints) = if state.is_editing_form() {
        ("EDIT:", FORM_HINTS)
    } else {
        ("NORMAL:", NAVIGATION_HINTS)
    };
    let controls = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.background.to_color())
                .bg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, Style::default().fg(theme.warning.to_color())),
    ]);

    let mut right = vec![];
    if let Some(error) = state.get_theme_error() {
        right.push(Span::styled(
            format!("{} ", error),
            styling::error_text_style(theme),
        ));
    }
    right.push(Span::styled(
        format!("{} v{} ", state.get_theme_mode().as_str(), env!("CARGO_PKG_VERSION")),
        styling::muted_text_style(theme),
    ));

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(40)].as_ref())
        .split(size);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Left),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        columns[1],
    );
}
