use super::countdown::TickId;
use crate::config::hotkeys::{get_action_for_event, is_preset_digit};
use crate::config::{Hotkey, HotkeyAction};
use crate::error::{AppError, AppResult};
use crate::state::{Control, State, StateError};
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different event types delivered to the render loop.
///
#[derive(Debug)]
pub enum Event {
    Input(CrosstermEvent),
    Tick,
    Countdown(TickId),
    AlertPulse(bool),
    Log(String),
}

pub type EventSender = mpsc::Sender<Event>;

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
    tx: EventSender,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(input) => {
                        if tx_clone.send(Event::Input(input)).is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => {
                    warn!("Failed to poll terminal events: {}", e);
                    thread::sleep(tick_rate);
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, tx }
    }

    /// Return a sender onto the event channel for background tasks.
    ///
    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }

    /// Receive next event and handle it accordingly. Returns result with
    /// value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        let event = self
            .rx
            .recv()
            .map_err(|_| AppError::Other("Event channel closed".to_string()))?;
        Ok(handle_event(event, state))
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a single event to state. Returns false if exit was requested.
///
pub fn handle_event(event: Event, state: &mut State) -> bool {
    match event {
        Event::Input(CrosstermEvent::Key(key)) => return handle_key(key, state),
        Event::Input(CrosstermEvent::Mouse(mouse)) => handle_mouse(mouse, state),
        Event::Input(_) | Event::Tick => (),
        Event::Countdown(id) => state.handle_countdown_tick(id),
        Event::AlertPulse(on) => state.set_alert_pulse(on),
        Event::Log(entry) => state.push_log_entry(entry),
    }
    true
}

fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    let pressed = Hotkey {
        code: key.code,
        modifiers: key.modifiers,
    };
    if is_preset_digit(&pressed) {
        if let KeyCode::Char(digit) = key.code {
            let index = digit as usize - '1' as usize;
            if index < state.get_presets().len() {
                report(state.activate(Control::Preset(index)));
            }
        }
        return true;
    }

    match get_action_for_event(&key, state.get_hotkeys()) {
        Some(HotkeyAction::ToggleRun) => report(state.activate(Control::PlayPause)),
        Some(HotkeyAction::Reset) => report(state.activate(Control::Reset)),
        Some(HotkeyAction::Dismiss) => {
            if state.is_dismiss_visible() {
                report(state.activate(Control::Dismiss));
            }
        }
        Some(HotkeyAction::FocusNext) => state.focus_next(),
        Some(HotkeyAction::FocusPrev) => state.focus_previous(),
        Some(HotkeyAction::Activate) => report(state.activate_focused()),
        Some(HotkeyAction::ToggleLog) => state.toggle_log(),
        Some(HotkeyAction::CycleTheme) => state.cycle_theme(),
        Some(HotkeyAction::Quit) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        None => match key.code {
            KeyCode::Right | KeyCode::Tab => state.focus_next(),
            KeyCode::Left | KeyCode::BackTab => state.focus_previous(),
            _ => (),
        },
    }
    true
}

fn handle_mouse(mouse: MouseEvent, state: &mut State) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(control) = state.control_at(mouse.column, mouse.row) {
        state.focus(control);
        report(state.activate(control));
    }
}

/// User-action errors are logged and never end the app.
///
fn report(result: Result<(), StateError>) {
    if let Err(e) = result {
        warn!("{}", AppError::from(e));
    }
}
