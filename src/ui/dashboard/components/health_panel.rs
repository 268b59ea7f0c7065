//! System health panel
//!
//! Shows exactly one of: the error slot, the derived health label (optionally with
//! the raw health document), or the loading placeholder.

use super::super::state::DashboardState;
use super::super::utils::status_class_color;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn health_lines(state: &DashboardState) -> Vec<Line<'static>> {
    let view = state.view();

    // The error slot is shared by both resources and takes over the panel.
    if let Some(error) = view.error() {
        return vec![Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))];
    }

    let Some(status) = view.health_status() else {
        return vec![Line::from(Span::styled(
            "Loading health status...",
            Style::default().fg(Color::Gray),
        ))];
    };

    let mut lines = Vec::new();

    let label = view.health_label();
    let color = status_class_color(label.status_class());
    let healthy = status.healthy_endpoints().map_or(0, Vec::len);

    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(color)),
        Span::styled(
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Healthy endpoints: ", Style::default().fg(Color::Gray)),
        Span::styled(healthy.to_string(), Style::default().fg(Color::White)),
    ]));

    if state.show_health_details() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Health Details",
            Style::default().fg(Color::Cyan),
        )));
        for raw in status.to_pretty_json().lines() {
            lines.push(Line::from(Span::styled(
                raw.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines
}

pub fn render_health_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("SYSTEM HEALTH")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(health_lines(state))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
