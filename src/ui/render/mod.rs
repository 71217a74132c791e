mod all;
mod controls;
mod face;
mod footer;
mod log;

use self::log::log;
use super::*;
use controls::{controls, dismiss_panel, presets};
use face::face;
use footer::footer;
use ratatui::layout::Rect;

pub use all::all as render;

/// Return a `width` x `height` rect centered in `area`, clipped to it.
///
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Lay out `count` cells of `width` x `height` in a centered row with `gap`
/// columns between them. Cells that do not fit are dropped.
///
fn centered_row(count: usize, width: u16, height: u16, gap: u16, area: Rect) -> Vec<Rect> {
    if count == 0 {
        return vec![];
    }
    let fitting = ((area.width + gap) / (width + gap)).max(1) as usize;
    let count = count.min(fitting);
    let total = width * count as u16 + gap * (count as u16 - 1);
    let row = centered(total, height, area);
    (0..count as u16)
        .map(|i| {
            Rect::new(row.x + i * (width + gap), row.y, width.min(row.width), row.height)
                .intersection(area)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        let area = Rect::new(10, 10, 20, 10);
        assert_eq!(centered(10, 4, area), Rect::new(15, 13, 10, 4));
        assert_eq!(centered(40, 40, area), area);
    }

    #[test]
    fn test_centered_row() {
        let area = Rect::new(0, 0, 40, 6);
        let cells = centered_row(3, 10, 4, 2, area);
        assert_eq!(
            cells,
            vec![
                Rect::new(3, 1, 10, 4),
                Rect::new(15, 1, 10, 4),
                Rect::new(27, 1, 10, 4),
            ]
        );
    }

    #[test]
    fn test_centered_row_drops_overflow() {
        let area = Rect::new(0, 0, 21, 4);
        assert_eq!(centered_row(3, 10, 4, 1, area).len(), 2);
        assert!(centered_row(0, 10, 4, 1, area).is_empty());
    }
}
