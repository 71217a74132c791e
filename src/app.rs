use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::alert::{Alerter, SilentAlerter, TerminalAlerter};
use crate::events::countdown::TokioScheduler;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, CustomLogger};
use crate::state::{Countdown, State};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout, Stdout};

/// Terminal bell, standing in for a vibration pulse.
///
const BELL: char = '\x07';

/// Options that come from the command line rather than the config file.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct LaunchOptions {
    pub initial_seconds: Option<u64>,
    pub alert_enabled: bool,
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    events: TerminalEventHandler,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config, options: LaunchOptions) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        let events = TerminalEventHandler::new();

        let logger = CustomLogger::new(config.level_filter()?);
        logger.forward_to(events.sender());
        logger::init(logger)?;
        info!("Starting application...");

        let alert_enabled = options.alert_enabled && config.alert.enabled;
        let scheduler = TokioScheduler::new(runtime.handle().clone(), events.sender());
        let alerter: Box<dyn Alerter> = if alert_enabled {
            Box::new(TerminalAlerter::new(runtime.handle().clone(), events.sender()))
        } else {
            debug!("Alerts disabled");
            Box::new(SilentAlerter)
        };
        let countdown = Countdown::new(Box::new(scheduler), alerter, config.countdown_settings());
        let mut state = State::new(countdown, config.presets.clone())
            .with_urgency_threshold(config.urgency_threshold_secs)
            .with_theme(config.theme())
            .with_hotkeys(config.hotkeys.clone())
            .with_bell(alert_enabled);
        if let Some(seconds) = options.initial_seconds.filter(|seconds| *seconds > 0) {
            state.add_time(seconds);
        }

        let mut app = App { state, events };
        let result = app.start_ui();
        app.state.shutdown();

        info!("Exiting application...");
        result.map_err(Into::into)
    }

    /// Take over the terminal and run the render loop on the main thread.
    /// The terminal is restored whatever the loop returns.
    ///
    fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let result = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| AppError::Terminal(e.to_string()))
            .and_then(|mut terminal| self.run(&mut terminal));

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        result
    }

    /// Draw, ring the bell if an alert pulse asked for it, then block on the
    /// next event. Returns once exit was requested.
    ///
    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> AppResult<()> {
        terminal.hide_cursor()?;
        loop {
            if let Ok(size) = terminal.backend().size() {
                self.state.set_terminal_size(size);
            }
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if self.state.take_bell_request() {
                execute!(terminal.backend_mut(), Print(BELL))?;
            }
            if !self.events.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        terminal.show_cursor()?;
        Ok(())
    }
}
