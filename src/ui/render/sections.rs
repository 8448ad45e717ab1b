use super::Frame;
use crate::content::Portfolio;
use crate::state::{Section, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render a read-only portfolio section.
///
pub fn section(frame: &mut Frame, size: Rect, state: &State, section: Section) {
    let theme = state.get_theme();
    let portfolio = state.get_portfolio();
    let lines = match section {
        Section::Hero => hero(portfolio, theme),
        Section::About => about(portfolio, theme),
        Section::Projects => projects(portfolio, theme),
        Section::Education => education(portfolio, theme),
        Section::Competencies => competencies(portfolio, theme),
        Section::Skills => skills(portfolio, theme),
        Section::Contact => vec![],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(section.title())
        .title_style(styling::active_block_title_style())
        .border_style(styling::normal_block_border_style(theme));
    let widget = Paragraph::new(lines)
        .block(block)
        .style(styling::normal_text_style(theme))
        .wrap(Wrap { trim: false })
        .scroll((state.get_scroll_offset(), 0));
    frame.render_widget(widget, size);
}

fn empty(theme: &Theme) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        "Nothing here yet.",
        styling::muted_text_style(theme),
    ))]
}

fn hero(portfolio: &Portfolio, theme: &Theme) -> Vec<Line<'static>> {
    let profile = &portfolio.profile;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            profile.name.clone(),
            styling::banner_style(theme),
        )),
        Line::from(Span::styled(
            profile.title.clone(),
            styling::heading_style(theme),
        )),
        Line::from(""),
        Line::from(profile.tagline.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  ·  {}", profile.location, profile.email),
            styling::muted_text_style(theme),
        )),
    ];
    if !profile.links.is_empty() {
        lines.push(Line::from(""));
    }
    for link in &profile.links {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", link.label), styling::heading_style(theme)),
            Span::raw(link.url.clone()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press c to get in touch.",
        styling::muted_text_style(theme),
    )));
    lines
}

fn about(portfolio: &Portfolio, theme: &Theme) -> Vec<Line<'static>> {
    if portfolio.about.is_empty() {
        return empty(theme);
    }
    let mut lines = vec![];
    for paragraph in &portfolio.about {
        lines.push(Line::from(paragraph.clone()));
        lines.push(Line::from(""));
    }
    lines
}

fn projects(portfolio: &Portfolio, theme: &Theme) -> Vec<Line<'static>> {
    if portfolio.projects.is_empty() {
        return empty(theme);
    }
    let mut lines = vec![];
    for project in &portfolio.projects {
        lines.push(Line::from(Span::styled(
            project.title.clone(),
            styling::heading_style(theme),
        )));
        lines.push(Line::from(project.description.clone()));
        if !project.tech.is_empty() {
            lines.push(Line::from(Span::styled(
                project.tech.join(" · "),
                styling::muted_text_style(theme),
            )));
        }
        if let Some(link) = &project.link {
            lines.push(Line::from(Span::styled(
                link.clone(),
                styling::banner_style(theme),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn education(portfolio: &Portfolio, theme: &Theme) -> Vec<Line<'static>> {
    if portfolio.education.is_empty() {
        return empty(theme);
    }
    let mut lines = vec![];
    for entry in &portfolio.education {
        lines.push(Line::from(vec![
            Span::styled(entry.degree.clone(), styling::heading_style(theme)),
            Span::styled(
                format!("  {}", entry.period),
                styling::muted_text_style(theme),
            ),
        ]));
        lines.push(Line::from(entry.institution.clone()));
        if let Some(details) = &entry.details {
            lines.push(Line::from(Span::styled(
                details.clone(),
                styling::muted_text_style(theme),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn competencies(portfolio: &Portfolio, theme: &Theme) -> Vec<Line<'static>> {
    if portfolio.competencies.is_empty() {
        return empty(theme);
    }
    let mut lines = vec![];
    for competency in &portfolio.competencies {
        lines.push(Line::from(Span::styled(
            competency.title.clone(),
            styling::heading_style(theme),
        )));
        lines.push(Line::from(competency.description.clone()));
        lines.push(Line::from(""));
    }
    lines
}

fn skills(portfolio: &Portfolio, theme: &Theme) -> Vec<Line<'static>> {
    if portfolio.skills.is_empty() {
        return empty(theme);
    }
    portfolio
        .skills
        .iter()
        .map(|group| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", group.category),
                    styling::heading_style(theme),
                ),
                Span::raw(group.skills.join(", ")),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_projects_lists_every_title() {
        let portfolio = Portfolio::default();
        let lines = projects(&portfolio, &Theme::default());
        let text: Vec<String> = lines.iter().map(plain).collect();
        for project in &portfolio.projects {
            assert!(text.contains(&project.title));
        }
    }

    #[test]
    fn test_empty_sections_show_placeholder() {
        let portfolio = Portfolio {
            skills: vec![],
            ..Portfolio::default()
        };
        let lines = skills(&portfolio, &Theme::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(plain(&lines[0]), "Nothing here yet.");
    }
}
