use devotional_types::AgeGroup;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::models::ElementId;
use crate::domain::models::Focus;
use crate::domain::services::app_state::SPINNER_FRAMES;
use crate::domain::services::AppState;
use crate::domain::services::DisplaySurface;

const HELP: &str =
    " Tab focus | ←/→ choose | Enter generate | Ctrl-N new | Ctrl-P print | Ctrl-C quit ";

fn focus_style(app_state: &AppState, focus: Focus) -> Style {
    if app_state.focus == focus {
        return Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }

    return Style::default();
}

fn age_group_line(app_state: &AppState) -> Line<'static> {
    let selected = app_state.ui.form().age_group;
    let mut spans = vec![Span::styled(
        "Age group: ",
        focus_style(app_state, Focus::AgeGroup),
    )];

    for group in AgeGroup::ALL {
        let style = if selected == Some(group) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", group.label()), style));
        spans.push(Span::raw(" "));
    }

    return Line::from(spans);
}

fn topic_line(app_state: &AppState) -> Line<'static> {
    let mut topic = app_state.ui.form().topic;
    if app_state.focus == Focus::Topic {
        topic.push('▏');
    }

    return Line::from(vec![
        Span::styled("Topic:     ", focus_style(app_state, Focus::Topic)),
        Span::raw(topic),
    ]);
}

fn suggestions_line(app_state: &AppState) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Ideas:     ",
        focus_style(app_state, Focus::Suggestions),
    )];

    for (i, topic) in app_state.ui.topic_suggestions().iter().enumerate() {
        let style = if app_state.focus == Focus::Suggestions && i == app_state.selected_suggestion {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Magenta)
        };
        spans.push(Span::styled(format!("[{topic}]"), style));
        spans.push(Span::raw(" "));
    }

    return Line::from(spans);
}

fn button_line(app_state: &AppState) -> Line<'static> {
    let ui = &app_state.ui;
    let mut style = focus_style(app_state, Focus::Submit);
    if !ui.is_enabled(ElementId::GenerateButton) {
        style = style.fg(Color::DarkGray);
    }

    let mut spans = vec![Span::styled(
        format!("< {} >", ui.text(ElementId::ButtonText)),
        style,
    )];
    if ui.is_visible(ElementId::LoadingSpinner) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            SPINNER_FRAMES[app_state.spinner_frame % SPINNER_FRAMES.len()],
            Style::default().fg(Color::Cyan),
        ));
    }

    return Line::from(spans);
}

fn heading(text: &str) -> Line<'static> {
    return Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
}

fn result_lines(app_state: &AppState) -> Vec<Line<'static>> {
    let ui = &app_state.ui;
    let mut tags = vec![Span::styled(
        format!(" {} ", ui.text(ElementId::AgeGroupTag)),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];
    if ui.is_visible(ElementId::TopicTag) {
        tags.push(Span::raw(" "));
        tags.push(Span::styled(
            format!(" {} ", ui.text(ElementId::TopicTag)),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            ui.text(ElementId::DevotionalTitle),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(tags),
        Line::default(),
        heading("Question of the Day"),
        Line::from(Span::styled(
            ui.text(ElementId::QuestionOfDay),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        heading("Listen"),
    ];
    if ui.is_visible(ElementId::ListenScripture) {
        lines.push(Line::from(Span::styled(
            ui.text(ElementId::ListenScripture),
            Style::default().fg(Color::Yellow),
        )));
    }

    let sections = [
        (None, ElementId::ListenContent),
        (Some("Learn"), ElementId::LearnContent),
        (Some("Live"), ElementId::LiveContent),
        (Some("Prayer"), ElementId::DevotionalPrayer),
    ];
    for (title, element) in sections {
        if let Some(title) = title {
            lines.push(Line::default());
            lines.push(heading(title));
        }
        for paragraph in ui.text(element).lines() {
            lines.push(Line::from(paragraph.to_string()));
        }
    }

    return lines;
}

fn draw_form(frame: &mut Frame, app_state: &AppState, area: Rect) {
    let lines = vec![
        age_group_line(app_state),
        topic_line(app_state),
        suggestions_line(app_state),
        Line::default(),
        button_line(app_state),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Create a devotional ");
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Draw the whole screen from the current app state.
pub fn draw(frame: &mut Frame, app_state: &AppState) {
    let ui = &app_state.ui;
    let show_error = ui.is_visible(ElementId::ErrorMessage);
    let show_result = ui.is_visible(ElementId::DevotionalResult);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(if show_error { 3 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " AOG Family Devotionals ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    draw_form(frame, app_state, chunks[1]);

    if show_error {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        frame.render_widget(
            Paragraph::new(ui.text(ElementId::ErrorMessage))
                .style(Style::default().fg(Color::Red))
                .block(block)
                .wrap(Wrap { trim: true }),
            chunks[2],
        );
    }

    if show_result {
        let block = Block::default().borders(Borders::ALL).title(" Devotional ");
        frame.render_widget(
            Paragraph::new(result_lines(app_state))
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((app_state.result_scroll, 0)),
            chunks[3],
        );
    }

    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
}
