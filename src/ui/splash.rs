//! Splash screen shown while the first fetches are in flight.

use crate::environment::Environment;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const LOGO: [&str; 6] = [
    "██████╗  ██████╗   ██████╗  ██╗  ██╗ ██╗   ██╗",
    "██╔══██╗ ██╔══██╗ ██╔═══██╗ ╚██╗██╔╝ ╚██╗ ██╔╝",
    "██████╔╝ ██████╔╝ ██║   ██║  ╚███╔╝   ╚████╔╝ ",
    "██╔═══╝  ██╔══██╗ ██║   ██║  ██╔██╗    ╚██╔╝  ",
    "██║      ██║  ██║ ╚██████╔╝ ██╔╝ ██╗    ██║   ",
    "╚═╝      ╚═╝  ╚═╝  ╚═════╝  ╚═╝  ╚═╝    ╚═╝   ",
];

fn splash_lines(environment: &Environment) -> Vec<Line<'static>> {
    let logo_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, logo_style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("LLM Proxy Dashboard v{}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(
        format!("Connecting to {}", environment.proxy_url()),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

pub fn render_splash(f: &mut Frame, environment: &Environment) {
    let lines = splash_lines(environment);
    let [area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
