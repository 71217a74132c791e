//! Button widgets.
//!
//! Rendering for the two control props in [`crate::state`]: the rounded glyph
//! button and the time preset button.

use super::styling;
use crate::state::{RoundedButton, TimePickerButton};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Size of a rounded button in cells.
///
pub const ROUNDED_BUTTON_SIZE: (u16, u16) = (10, 5);

/// Size of a preset button in cells, unit caption included.
///
pub const TIME_PICKER_SIZE: (u16, u16) = (10, 4);

/// Draws a [`RoundedButton`] as a rounded box filled with a vertical gradient.
///
pub struct RoundedButtonWidget<'a> {
    button: RoundedButton,
    theme: &'a Theme,
    focused: bool,
    flash: bool,
}

impl<'a> RoundedButtonWidget<'a> {
    pub fn new(button: RoundedButton, theme: &'a Theme) -> Self {
        RoundedButtonWidget {
            button,
            theme,
            focused: false,
            flash: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Invert the gradient, used while the alert pulses.
    ///
    pub fn flash(mut self, flash: bool) -> Self {
        self.flash = flash;
        self
    }
}

impl Widget for RoundedButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let (mut top, mut bottom) = styling::button_gradient(self.theme, self.button.variant);
        if self.flash {
            std::mem::swap(&mut top, &mut bottom);
        }
        let span = area.height.saturating_sub(1).max(1) as f64;
        for offset in 0..area.height {
            let color = top.lerp(&bottom, offset as f64 / span);
            let row = Rect::new(area.x, area.y + offset, area.width, 1);
            buf.set_style(row, Style::default().bg(color.to_color()));
        }

        let border_style = if self.focused {
            Style::default()
                .fg(self.theme.text.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(bottom.to_color())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }
        let glyph_row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        Paragraph::new(self.button.glyph.symbol())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(glyph_row, buf);
    }
}

/// Draws a [`TimePickerButton`]: a bordered `+ amount` label above the unit.
///
pub struct TimePickerWidget<'a> {
    button: TimePickerButton,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> TimePickerWidget<'a> {
    pub fn new(button: TimePickerButton, theme: &'a Theme) -> Self {
        TimePickerWidget {
            button,
            theme,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TimePickerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        let label_area = Rect::new(area.x, area.y, area.width, area.height - 1);
        let unit_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

        let border_style = if self.focused {
            styling::active_block_border_style(self.theme)
        } else {
            Style::default().fg(self.theme.primary.to_color())
        };
        Paragraph::new(self.button.label())
            .style(styling::normal_text_style(self.theme))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if self.focused {
                        BorderType::Thick
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(border_style),
            )
            .render(label_area, buf);
        Paragraph::new(self.button.unit.label())
            .style(styling::normal_text_style(self.theme))
            .alignment(Alignment::Center)
            .render(unit_area, buf);
    }
}
