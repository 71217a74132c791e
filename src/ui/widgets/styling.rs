use crate::state::ButtonVariant;
use crate::ui::theme::{ColorSpec, Theme};
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.border_active.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the remaining time text.
///
pub fn time_text_style(theme: &Theme, urgent: bool) -> Style {
    let color = if urgent { theme.alert } else { theme.text };
    Style::default()
        .fg(color.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the screen background style.
///
pub fn background_style(theme: &Theme) -> Style {
    Style::default()
        .bg(theme.background.to_color())
        .fg(theme.text.to_color())
}

/// Return the color of the progress arc.
///
pub fn progress_arc_color(theme: &Theme, urgent: bool) -> ColorSpec {
    if urgent {
        theme.alert
    } else {
        theme.primary
    }
}

/// Return the two gradient stops of a rounded button.
///
pub fn button_gradient(theme: &Theme, variant: ButtonVariant) -> (ColorSpec, ColorSpec) {
    match variant {
        ButtonVariant::Normal => (theme.primary, theme.secondary),
        ButtonVariant::Disabled => (theme.disabled_start, theme.disabled_end),
        ButtonVariant::Dismiss => (theme.primary, theme.alert),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_gradient_per_variant() {
        let theme = Theme::midnight();
        assert_eq!(
            button_gradient(&theme, ButtonVariant::Normal),
            (theme.primary, theme.secondary)
        );
        assert_eq!(
            button_gradient(&theme, ButtonVariant::Disabled),
            (theme.disabled_start, theme.disabled_end)
        );
        assert_eq!(
            button_gradient(&theme, ButtonVariant::Dismiss),
            (theme.primary, theme.alert)
        );
    }

    #[test]
    fn test_urgent_colors() {
        let theme = Theme::midnight();
        assert_eq!(progress_arc_color(&theme, true), theme.alert);
        assert_eq!(progress_arc_color(&theme, false), theme.primary);
        assert_eq!(
            time_text_style(&theme, true).fg,
            Some(theme.alert.to_color())
        );
    }
}
