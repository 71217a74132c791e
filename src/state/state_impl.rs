use crate::config::Hotkeys;
use crate::events::countdown::TickId;
use log::*;
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::time::Instant;

use super::animation::ArcAnimation;
use super::controls::{ButtonVariant, Control, Glyph, RoundedButton, TimePickerButton};
use super::countdown::Countdown;
use super::error::StateError;
use super::timer::{AlertState, TimerState};

/// Log lines kept for the log panel.
///
pub const MAX_LOG_ENTRIES: usize = 200;

/// Houses data representative of application state.
///
pub struct State {
    countdown: Countdown,
    presets: Vec<TimePickerButton>,
    urgency_threshold: u64,
    terminal_size: Rect,
    focus_index: usize,
    hit_regions: Vec<(Rect, Control)>,
    arc_animation: ArcAnimation,
    alert_pulse: bool,
    ring_bell: bool,
    bell_pending: bool,
    log_visible: bool,
    log_entries: VecDeque<String>,
    theme: crate::ui::Theme,
    hotkeys: Hotkeys,
}

impl State {
    /// Return a new state around `countdown` with the given presets.
    ///
    pub fn new(countdown: Countdown, presets: Vec<TimePickerButton>) -> State {
        State {
            countdown,
            presets,
            urgency_threshold: 6,
            terminal_size: Rect::default(),
            focus_index: 0,
            hit_regions: vec![],
            arc_animation: ArcAnimation::default(),
            alert_pulse: false,
            ring_bell: true,
            bell_pending: false,
            log_visible: false,
            log_entries: VecDeque::new(),
            theme: crate::ui::Theme::default(),
            hotkeys: Hotkeys::default(),
        }
    }

    pub fn with_urgency_threshold(mut self, seconds: u64) -> Self {
        self.urgency_threshold = seconds;
        self
    }

    pub fn with_theme(mut self, theme: crate::ui::Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_hotkeys(mut self, hotkeys: Hotkeys) -> Self {
        self.hotkeys = hotkeys;
        self
    }

    pub fn with_bell(mut self, ring_bell: bool) -> Self {
        self.ring_bell = ring_bell;
        self
    }

    /// Return the timer data.
    ///
    pub fn timer(&self) -> &TimerState {
        self.countdown.timer()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn get_presets(&self) -> &[TimePickerButton] {
        &self.presets
    }

    pub fn get_urgency_threshold(&self) -> u64 {
        self.urgency_threshold
    }

    /// Update the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Play button while stopped, pause button while running. Play is
    /// disabled until there is time on the clock.
    ///
    pub fn play_button(&self) -> RoundedButton {
        let timer = self.timer();
        if timer.is_running() {
            RoundedButton::new(Glyph::Pause, ButtonVariant::Normal)
        } else if timer.can_start() {
            RoundedButton::new(Glyph::Play, ButtonVariant::Normal)
        } else {
            RoundedButton::new(Glyph::Play, ButtonVariant::Disabled)
        }
    }

    pub fn reset_button(&self) -> RoundedButton {
        RoundedButton::new(Glyph::Undo, ButtonVariant::Normal)
    }

    pub fn dismiss_button(&self) -> RoundedButton {
        RoundedButton::new(Glyph::Close, ButtonVariant::Dismiss)
    }

    pub fn is_dismiss_visible(&self) -> bool {
        self.timer().is_complete()
    }

    /// Controls currently on screen, in focus order.
    ///
    pub fn controls(&self) -> Vec<Control> {
        let mut controls: Vec<Control> = (0..self.presets.len()).map(Control::Preset).collect();
        controls.push(Control::PlayPause);
        controls.push(Control::Reset);
        if self.is_dismiss_visible() {
            controls.push(Control::Dismiss);
        }
        controls
    }

    /// Tap `control`, routing its activation into the countdown.
    ///
    pub fn activate(&mut self, control: Control) -> Result<(), StateError> {
        debug!("Activating control {:?}...", control);
        let result = match control {
            Control::Preset(index) => {
                let preset = *self
                    .presets
                    .get(index)
                    .ok_or(StateError::ControlUnavailable(control))?;
                let countdown = &mut self.countdown;
                preset.tap(|seconds| countdown.add_time(seconds));
                Ok(())
            }
            Control::PlayPause => {
                let button = self.play_button();
                let mut result = Ok(());
                let countdown = &mut self.countdown;
                if !button.tap(|| result = countdown.toggle()) {
                    debug!("Start is disabled until time is added");
                }
                result
            }
            Control::Reset => {
                let button = self.reset_button();
                let countdown = &mut self.countdown;
                button.tap(|| countdown.reset());
                Ok(())
            }
            Control::Dismiss => {
                if !self.is_dismiss_visible() {
                    return Err(StateError::ControlUnavailable(control));
                }
                let button = self.dismiss_button();
                let countdown = &mut self.countdown;
                button.tap(|| countdown.dismiss());
                Ok(())
            }
        };
        self.after_transition();
        result
    }

    /// Put `seconds` on the clock without going through a preset.
    ///
    pub fn add_time(&mut self, seconds: u64) {
        self.countdown.add_time(seconds);
        self.after_transition();
    }

    /// Handle a countdown tick delivered by the scheduler.
    ///
    pub fn handle_countdown_tick(&mut self, id: TickId) {
        if self.countdown.on_tick(id) {
            self.after_transition();
        }
    }

    /// Stop the countdown's tick and alert before the screen goes away.
    ///
    pub fn shutdown(&mut self) {
        self.countdown.shutdown();
    }

    fn after_transition(&mut self) {
        let controls = self.controls().len();
        if self.focus_index >= controls {
            self.focus_index = controls - 1;
        }
        if self.timer().alert() == AlertState::Idle {
            self.alert_pulse = false;
        }
        let target = self.timer().sweep_degrees();
        self.arc_animation.retarget(target, Instant::now());
    }

    pub fn focused_control(&self) -> Control {
        let controls = self.controls();
        controls[self.focus_index.min(controls.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        let count = self.controls().len();
        self.focus_index = (self.focus_index + 1) % count;
    }

    pub fn focus_previous(&mut self) {
        let count = self.controls().len();
        self.focus_index = (self.focus_index + count - 1) % count;
    }

    pub fn focus(&mut self, control: Control) {
        if let Some(index) = self.controls().iter().position(|c| *c == control) {
            self.focus_index = index;
        }
    }

    pub fn activate_focused(&mut self) -> Result<(), StateError> {
        self.activate(self.focused_control())
    }

    /// Forget hit regions from the previous frame.
    ///
    pub fn clear_hit_regions(&mut self) {
        self.hit_regions.clear();
    }

    /// Remember where `control` was drawn for mouse hit testing.
    ///
    pub fn register_hit_region(&mut self, area: Rect, control: Control) {
        self.hit_regions.push((area, control));
    }

    /// Return the control drawn at the given terminal cell.
    ///
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        self.hit_regions
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, control)| *control)
    }

    /// Sweep to draw right now, eased toward the timer's sweep.
    ///
    pub fn displayed_sweep(&self) -> f64 {
        self.arc_animation.value_at(Instant::now())
    }

    /// Record an alert pulse from the alerter.
    ///
    pub fn set_alert_pulse(&mut self, on: bool) {
        let alerting = self.timer().alert() == AlertState::Alerting;
        self.alert_pulse = on && alerting;
        if self.alert_pulse && self.ring_bell {
            self.bell_pending = true;
        }
    }

    pub fn is_alert_pulse(&self) -> bool {
        self.alert_pulse
    }

    /// Return whether the terminal bell should ring, clearing the request.
    ///
    pub fn take_bell_request(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    /// Append a formatted log line, dropping the oldest beyond the limit.
    ///
    pub fn push_log_entry(&mut self, entry: String) {
        if self.log_entries.len() == MAX_LOG_ENTRIES {
            self.log_entries.pop_front();
        }
        self.log_entries.push_back(entry);
    }

    pub fn get_log_entries(&self) -> &VecDeque<String> {
        &self.log_entries
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    /// Switch to the next built-in theme.
    ///
    pub fn cycle_theme(&mut self) {
        self.theme = crate::ui::Theme::next_after(&self.theme.name);
        info!("Switched theme to {}", self.theme.name);
    }

    pub fn get_hotkeys(&self) -> &Hotkeys {
        &self.hotkeys
    }
}
