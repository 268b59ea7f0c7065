//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{input_poll, splash_duration};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::refresher::{RefreshRequester, RefreshTarget};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_interval: Duration) -> Self {
        Self {
            with_background_color,
            refresh_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying proxy health and models.
    Dashboard,
}

/// What the UI loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Updated from the start so nothing is lost while the
    /// splash screen is up.
    dashboard: DashboardState,

    /// Receives events from the refresh worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Requests manual refreshes from the refresh worker.
    refresh_requester: RefreshRequester,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        refresh_requester: RefreshRequester,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(environment, Instant::now(), ui_config),
            event_receiver,
            refresh_requester,
        }
    }

    fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
    }

    /// Queue all incoming worker events and fold them into the dashboard.
    fn update(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
        self.dashboard.update();
    }

    fn handle_key(&mut self, code: KeyCode) -> KeyAction {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            return KeyAction::Quit;
        }

        match self.current_screen {
            // Any key press will skip the splash screen
            Screen::Splash => self.show_dashboard(),
            Screen::Dashboard => match code {
                KeyCode::Char('r') => {
                    self.refresh_requester.request(RefreshTarget::All);
                }
                KeyCode::Char('h') => {
                    self.refresh_requester.request(RefreshTarget::Health);
                }
                KeyCode::Char('m') => {
                    self.refresh_requester.request(RefreshTarget::Models);
                }
                KeyCode::Char('d') => self.dashboard.toggle_health_details(),
                KeyCode::Up | KeyCode::Char('k') => self.dashboard.scroll_models_up(),
                KeyCode::Down | KeyCode::Char('j') => self.dashboard.scroll_models_down(),
                _ => {}
            },
        }
        KeyAction::Continue
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    loop {
        app.update();
        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            app.show_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(input_poll())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) == KeyAction::Quit {
                    return Ok(());
                }
            }
        }

        // Let worker tasks run between frames
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f, &app.dashboard.environment),
        Screen::Dashboard => render_dashboard(f, &app.dashboard),
    }
}
