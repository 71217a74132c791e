use super::{centered, centered_row, Frame};
use crate::state::{Control, State};
use crate::ui::widgets::{
    buttons::{RoundedButtonWidget, TimePickerWidget, ROUNDED_BUTTON_SIZE, TIME_PICKER_SIZE},
    styling,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    widgets::Paragraph,
};

const BUTTON_GAP: u16 = 4;

/// Render the preset buttons.
///
pub fn presets(frame: &mut Frame, size: Rect, state: &mut State) {
    let (width, height) = TIME_PICKER_SIZE;
    let cells = centered_row(state.get_presets().len(), width, height, BUTTON_GAP, size);
    let focused = state.focused_control();
    for (index, cell) in cells.into_iter().enumerate() {
        let control = Control::Preset(index);
        let widget = TimePickerWidget::new(state.get_presets()[index], state.get_theme())
            .focused(focused == control);
        frame.render_widget(widget, cell);
        state.register_hit_region(cell, control);
    }
}

/// Render the play/pause and reset buttons.
///
pub fn controls(frame: &mut Frame, size: Rect, state: &mut State) {
    let (width, height) = ROUNDED_BUTTON_SIZE;
    let buttons = [
        (Control::PlayPause, state.play_button()),
        (Control::Reset, state.reset_button()),
    ];
    let cells = centered_row(buttons.len(), width, height, BUTTON_GAP, size);
    let focused = state.focused_control();
    for ((control, button), cell) in buttons.into_iter().zip(cells) {
        let widget =
            RoundedButtonWidget::new(button, state.get_theme()).focused(focused == control);
        frame.render_widget(widget, cell);
        state.register_hit_region(cell, control);
    }
}

/// Render the dismiss button and its caption once the countdown completes.
/// The button flashes with the alert pulse.
///
pub fn dismiss_panel(frame: &mut Frame, size: Rect, state: &mut State) {
    if !state.is_dismiss_visible() {
        return;
    }
    let (width, height) = ROUNDED_BUTTON_SIZE;
    let panel = centered(width.max(12), height + 1, size);
    let button_area = centered(width, height.min(panel.height.saturating_sub(1)), panel);
    let button_area = Rect::new(button_area.x, panel.y, button_area.width, button_area.height);

    let widget = RoundedButtonWidget::new(state.dismiss_button(), state.get_theme())
        .focused(state.focused_control() == Control::Dismiss)
        .flash(state.is_alert_pulse());
    frame.render_widget(widget, button_area);

    if panel.height > button_area.height {
        let caption = Rect::new(panel.x, button_area.y + button_area.height, panel.width, 1);
        let theme = state.get_theme();
        let style = if state.is_alert_pulse() {
            styling::time_text_style(theme, true)
        } else {
            styling::normal_text_style(theme).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new("DISMISS")
                .style(style)
                .alignment(Alignment::Center),
            caption,
        );
    }
    state.register_hit_region(panel, Control::Dismiss);
}
