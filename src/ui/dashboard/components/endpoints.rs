//! API endpoints panel
//!
//! Lists the proxy's well-known endpoints and the environment being monitored

use crate::consts::cli_consts::endpoints;
use crate::environment::Environment;

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Endpoints shown in the panel, with a short description each.
const LISTED_ENDPOINTS: [(&str, &str); 4] = [
    (endpoints::HEALTH, "Health check"),
    (endpoints::MODELS, "List models"),
    (endpoints::CHAT_COMPLETIONS, "Chat completions"),
    (endpoints::COMPLETIONS, "Text completions"),
];

pub fn render_endpoints_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    let env_color = match state.environment {
        Environment::Local => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    lines.push(Line::from(Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )));

    // Uptime
    let uptime = state.start_time.elapsed().as_secs();
    let uptime_string = if uptime >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime / 3600,
            (uptime % 3600) / 60,
            uptime % 60
        )
    } else {
        format!("Uptime: {}m {}s", uptime / 60, uptime % 60)
    };
    lines.push(Line::from(Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )));
    lines.push(Line::from(""));

    for (path, description) in LISTED_ENDPOINTS {
        lines.push(Line::from(vec![
            Span::styled(
                state.environment.endpoint_url(path),
                Style::default().fg(Color::LightBlue),
            ),
            Span::styled(format!("  {}", description), Style::default().fg(Color::Gray)),
        ]));
    }

    let block = Block::default()
        .title("API ENDPOINTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
