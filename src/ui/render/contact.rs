use super::Frame;
use crate::contact::{BannerKind, ContactForm, Field};
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the contact form with inline errors and the result banner.
///
pub fn contact(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.get_contact_form();
    let editing = state.is_editing_form();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Contact")
        .title_style(styling::active_block_title_style())
        .border_style(if editing {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        });
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(6),
            ]
            .as_ref(),
        )
        .split(inner);

    frame.render_widget(Paragraph::new(status_line(state, form, theme)), rows[0]);
    for (i, field) in Field::ALL.iter().enumerate() {
        let focused = editing && form.focused() == *field;
        render_field(frame, rows[i + 1], form, *field, focused, theme);
    }
}

fn status_line(state: &State, form: &ContactForm, theme: &Theme) -> Line<'static> {
    if form.is_submitting() {
        return Line::from(vec![
            spinner::widget(state),
            Span::styled(" Sending message...", styling::muted_text_style(theme)),
        ]);
    }
    match form.banner() {
        Some(banner) => {
            let style = match banner.kind {
                BannerKind::Success => styling::success_text_style(theme),
                BannerKind::Error => styling::error_text_style(theme),
            };
            Line::from(vec![
                Span::styled(banner.message.clone(), style),
                Span::styled("  (x to dismiss)", styling::muted_text_style(theme)),
            ])
        }
        None if state.is_editing_form() => Line::from(Span::styled(
            "Fill in the form and press Ctrl+S to send.",
            styling::muted_text_style(theme),
        )),
        None => Line::from(Span::styled(
            "Press Enter to start writing a message.",
            styling::muted_text_style(theme),
        )),
    }
}

fn render_field(
    frame: &mut Frame,
    size: Rect,
    form: &ContactForm,
    field: Field,
    focused: bool,
    theme: &Theme,
) {
    let field_state = form.field(field);
    let title = if field.rules().required {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    let border_style = if field_state.error.is_some() {
        styling::error_text_style(theme)
    } else if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    let mut lines: Vec<Line> = field_state
        .value
        .split('\n')
        .map(|line| Line::from(line.to_string()))
        .collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled("█", styling::active_block_border_style(theme)));
        }
    }
    if let Some(error) = &field_state.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            styling::error_text_style(theme),
        )));
    }

    // Keep the cursor line visible in tall messages.
    let visible = size.height.saturating_sub(2);
    let overflow = (lines.len() as u16).saturating_sub(visible);
    let widget = Paragraph::new(lines)
        .block(block)
        .style(styling::normal_text_style(theme))
        .wrap(Wrap { trim: false })
        .scroll((overflow, 0));
    frame.render_widget(widget, size);
}
