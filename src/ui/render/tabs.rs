use super::Frame;
use crate::state::{Focus, Section, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
};

/// Render section navigation tabs.
///
pub fn tabs(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| Line::from(format!("{} {}", i + 1, section.title())))
        .collect();

    let border_style = if state.current_focus() == Focus::Navigation {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.get_portfolio().profile.name.as_str())
        .title_style(styling::active_block_title_style())
        .border_style(border_style);

    let widget = Tabs::new(titles)
        .block(block)
        .select(state.current_section().index())
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::active_tab_style(theme));
    frame.render_widget(widget, size);
}
