//! Available models panel

use super::super::state::DashboardState;
use super::super::utils::format_created;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the model list in server order, starting at the scroll position.
pub fn render_models_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let view = state.view();
    let models = view.models();

    let lines: Vec<Line> = if view.is_loading() {
        vec![Line::from(Span::styled(
            "Loading models...",
            Style::default().fg(Color::Gray),
        ))]
    } else if models.is_empty() {
        vec![Line::from(Span::styled(
            "No models available",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        models
            .iter()
            .skip(state.model_scroll())
            .flat_map(|model| {
                [
                    Line::from(Span::styled(
                        model.id.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(vec![
                        Span::styled("  Owner: ", Style::default().fg(Color::Gray)),
                        Span::styled(model.owned_by.clone(), Style::default().fg(Color::Yellow)),
                        Span::styled("  Object: ", Style::default().fg(Color::Gray)),
                        Span::raw(model.object.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("  Created: ", Style::default().fg(Color::Gray)),
                        Span::styled(
                            format_created(model.created),
                            Style::default().fg(Color::LightBlue),
                        ),
                    ]),
                ]
            })
            .collect()
    };

    let title = if view.is_loading() {
        "AVAILABLE MODELS".to_string()
    } else {
        format!("AVAILABLE MODELS ({})", models.len())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
