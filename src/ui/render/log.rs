use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

/// Render log widget according to state. The newest entries that fit are
/// shown, oldest first.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(Span::styled(" Log ", styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styling::normal_block_border_style(theme));

    let capacity = block.inner(size).height as usize;
    let entries = state.get_log_entries();
    let skip = entries.len().saturating_sub(capacity);
    let items: Vec<ListItem> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.clone(),
                styling::normal_text_style(theme),
            )))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .block(block);
    frame.render_widget(list, size);
}
