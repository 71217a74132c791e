use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::HotkeyAction;
use crate::state::{Phase, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Format the hotkey hints relevant to the current phase.
///
fn format_hotkeys_for_phase(phase: Phase, state: &State) -> String {
    let hotkeys = state.get_hotkeys();
    let mut actions = vec![(HotkeyAction::ToggleRun, "start/pause", None)];
    if phase == Phase::Complete {
        actions.push((HotkeyAction::Dismiss, "dismiss", None));
    }
    actions.extend([
        (HotkeyAction::Reset, "reset", None),
        (
            HotkeyAction::FocusPrev,
            "focus (also ←/→, Tab)",
            Some(HotkeyAction::FocusNext),
        ),
        (HotkeyAction::Activate, "press", None),
        (HotkeyAction::ToggleLog, "log", None),
        (HotkeyAction::CycleTheme, "theme", None),
        (HotkeyAction::Quit, "quit", None),
    ]);
    format!(
        " 1-{}: add time,{}",
        state.get_presets().len(),
        build_footer_text(hotkeys, &actions)
    )
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let phase = state.timer().phase();
    let controls_text = format_hotkeys_for_phase(phase, state);
    let status_text = format!("{} | {} ", phase.label(), theme.name);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(status_text.chars().count() as u16),
        ])
        .split(size);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            controls_text,
            styling::muted_text_style(theme),
        ))),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            status_text,
            styling::normal_text_style(theme).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::recording_countdown;
    use crate::state::{TimePickerButton, TimeUnit};

    fn state() -> State {
        let (countdown, _probe) = recording_countdown();
        State::new(
            countdown,
            vec![
                TimePickerButton::new(1, TimeUnit::Minute),
                TimePickerButton::new(15, TimeUnit::Second),
            ],
        )
    }

    #[test]
    fn test_footer_lists_hotkeys() {
        let state = state();
        let text = format_hotkeys_for_phase(Phase::Idle, &state);
        assert!(text.starts_with(" 1-2: add time,"));
        assert!(text.contains("Space: start/pause"));
        assert!(text.contains("q: quit"));
        assert!(text.contains("h/l: focus (also ←/→, Tab)"));
        assert!(!text.contains("dismiss"));
    }

    #[test]
    fn test_footer_mentions_dismiss_when_complete() {
        let state = state();
        let text = format_hotkeys_for_phase(Phase::Complete, &state);
        assert!(text.contains("d: dismiss"));
    }
}
