use super::{controls, dismiss_panel, face, footer, log, presets, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

/// Height of the log panel when shown.
///
const LOG_PANEL_HEIGHT: u16 = 8;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    state.set_terminal_size(size);
    state.clear_hit_regions();

    frame.render_widget(
        Block::default().style(styling::background_style(state.get_theme())),
        size,
    );

    let mut constraints = vec![Constraint::Min(0)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(2, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(rows[0]);

    face(frame, body[0], state);
    presets(frame, body[1], state);
    controls(frame, body[2], state);
    dismiss_panel(frame, body[3], state);

    if state.is_log_visible() {
        log(frame, rows[1], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::recording_countdown;
    use crate::state::{Control, TimePickerButton, TimeUnit};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn state() -> State {
        let (countdown, _probe) = recording_countdown();
        State::new(
            countdown,
            vec![
                TimePickerButton::new(10, TimeUnit::Minute),
                TimePickerButton::new(1, TimeUnit::Minute),
                TimePickerButton::new(15, TimeUnit::Second),
            ],
        )
    }

    fn draw(state: &mut State) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 48)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_initial_screen() {
        let mut state = state();
        let text = screen_text(&draw(&mut state));
        assert!(text.contains("00:00:00"));
        assert!(text.contains("+ 10"));
        assert!(text.contains("+ 15"));
        assert!(text.contains("sec"));
        assert!(!text.contains("DISMISS"));
        assert_eq!(state.get_terminal_size().width, 80);
    }

    #[test]
    fn test_renders_added_time() {
        let mut state = state();
        state.activate(Control::Preset(0)).unwrap();
        let text = screen_text(&draw(&mut state));
        assert!(text.contains("00:10:00"));
    }

    #[test]
    fn test_registers_hit_regions_for_every_control() {
        let mut state = state();
        let _ = draw(&mut state);
        let mut hit = vec![];
        let size = state.get_terminal_size();
        for y in 0..size.height {
            for x in 0..size.width {
                if let Some(control) = state.control_at(x, y) {
                    if !hit.contains(&control) {
                        hit.push(control);
                    }
                }
            }
        }
        for control in state.controls() {
            assert!(hit.contains(&control), "{:?} has no hit region", control);
        }
    }

    #[test]
    fn test_renders_dismiss_panel_when_complete() {
        let mut state = state();
        state.activate(Control::Preset(2)).unwrap();
        state.activate(Control::PlayPause).unwrap();
        while let Some(id) = state.countdown().pending_tick() {
            state.handle_countdown_tick(id);
        }
        assert!(state.timer().is_complete());
        let text = screen_text(&draw(&mut state));
        assert!(text.contains("DISMISS"));
        assert!(text.contains("00:00:00"));
    }

    #[test]
    fn test_renders_log_panel_when_visible() {
        let mut state = state();
        state.push_log_entry("12:00:00 [INFO] hello from the log".to_string());
        state.toggle_log();
        let text = screen_text(&draw(&mut state));
        assert!(text.contains("hello from the log"));
    }
}
