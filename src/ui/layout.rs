//! Chip wrapping and mouse hit-testing.
//!
//! Panes record where they drew each clickable element into a [`HitMap`]
//! during rendering; the event loop resolves mouse clicks against the map
//! from the most recent frame.

use ratatui::layout::Rect;

/// Blank columns between neighbouring chips.
pub const CHIP_GAP: u16 = 1;

/// Horizontal padding inside a chip, per side.
pub const CHIP_PAD: u16 = 1;

/// Position of one chip relative to the top-left of the chip area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    pub row: usize,
    pub x: u16,
    pub width: u16,
}

/// Lays chips of the given content widths out left to right, wrapping to a
/// new row when the next chip would pass `area_width`. A chip wider than the
/// whole area gets a row of its own and is clipped to the area.
pub fn layout_chips(content_widths: &[u16], area_width: u16) -> Vec<ChipSlot> {
    let mut slots = Vec::with_capacity(content_widths.len());
    let mut row = 0;
    let mut x: u16 = 0;

    for &content in content_widths {
        let width = content.saturating_add(2 * CHIP_PAD).min(area_width.max(1));
        if x > 0 && x.saturating_add(width) > area_width {
            row += 1;
            x = 0;
        }
        slots.push(ChipSlot { row, x, width });
        x = x.saturating_add(width).saturating_add(CHIP_GAP);
    }
    slots
}

/// First row to draw so that `cursor_row` stays inside `visible_rows`.
pub fn scroll_for(cursor_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return cursor_row;
    }
    cursor_row.saturating_sub(visible_rows - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    Chip(usize),
    Bit(usize),
}

#[derive(Debug, Default)]
pub struct HitMap {
    targets: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn push(&mut self, area: Rect, hit: Hit) {
        self.targets.push((area, hit));
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        self.targets
            .iter()
            .find(|(r, _)| {
                column >= r.x
                    && column < r.x.saturating_add(r.width)
                    && row >= r.y
                    && row < r.y.saturating_add(r.height)
            })
            .map(|&(_, hit)| hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_wrap_at_area_width() {
        // widths 4 + 2 pad = 6 each; two fit in 13 (6 + 1 + 6), three do not.
        let slots = layout_chips(&[4, 4, 4], 13);
        assert_eq!(slots[0], ChipSlot { row: 0, x: 0, width: 6 });
        assert_eq!(slots[1], ChipSlot { row: 0, x: 7, width: 6 });
        assert_eq!(slots[2], ChipSlot { row: 1, x: 0, width: 6 });
    }

    #[test]
    fn oversized_chip_is_clipped_to_its_own_row() {
        let slots = layout_chips(&[2, 50, 2], 20);
        assert_eq!(slots[1], ChipSlot { row: 1, x: 0, width: 20 });
        assert_eq!(slots[2].row, 2);
        for s in &slots {
            assert!(s.x + s.width <= 20);
        }
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        assert_eq!(scroll_for(0, 3), 0);
        assert_eq!(scroll_for(2, 3), 0);
        assert_eq!(scroll_for(5, 3), 3);
    }

    #[test]
    fn hit_map_resolves_clicks() {
        let mut map = HitMap::default();
        map.push(Rect::new(2, 2, 4, 1), Hit::Chip(0));
        map.push(Rect::new(0, 10, 6, 3), Hit::Bit(5));
        assert_eq!(map.hit(2, 2), Some(Hit::Chip(0)));
        assert_eq!(map.hit(5, 2), Some(Hit::Chip(0)));
        assert_eq!(map.hit(6, 2), None);
        assert_eq!(map.hit(3, 12), Some(Hit::Bit(5)));
        map.clear();
        assert_eq!(map.hit(2, 2), None);
    }
}
