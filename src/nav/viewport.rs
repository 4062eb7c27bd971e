/// Selection cursor and scroll window over the active listing.
///
/// Invariants maintained by every method, for a listing of `len` entries
/// displayed in `rows` rows:
/// - `selected < max(1, len)`
/// - `scroll <= selected <= scroll + rows - 1`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub selected: usize,
    pub scroll: usize,
}

impl Viewport {
    /// Move back to the first entry.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll = 0;
    }

    /// Step the cursor down one entry, scrolling by at most one row.
    pub fn move_down(&mut self, len: usize, rows: usize) {
        let rows = rows.max(1);
        if self.selected + 1 < len {
            self.selected += 1;
        }
        if self.selected > self.scroll + rows - 1 {
            self.scroll += 1;
        }
        self.fit(rows);
    }

    /// Step the cursor up one entry, scrolling by at most one row.
    pub fn move_up(&mut self, rows: usize) {
        self.selected = self.selected.saturating_sub(1);
        if self.selected < self.scroll {
            self.scroll -= 1;
        }
        self.fit(rows);
    }

    /// Pull the cursor back inside a listing that may have shrunk.
    pub fn clamp_to(&mut self, len: usize, rows: usize) {
        let last = len.max(1) - 1;
        if self.selected > last {
            self.selected = last;
        }
        self.fit(rows);
    }

    /// Re-clamp the scroll window after the number of visible rows changed.
    pub fn fit(&mut self, rows: usize) {
        let rows = rows.max(1);
        let lowest = self.selected.saturating_sub(rows - 1);
        self.scroll = self.scroll.clamp(lowest, self.selected);
    }

    /// Index range of the entries visible in `rows` rows.
    pub fn visible_range(&self, len: usize, rows: usize) -> std::ops::Range<usize> {
        let start = self.scroll.min(len);
        let end = (self.scroll + rows).min(len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_down_past_window_scrolls_one_row_at_a_time() {
        let mut vp = Viewport::default();
        for _ in 0..6 {
            vp.move_down(10, 5);
        }
        assert_eq!(vp.selected, 6);
        assert_eq!(vp.scroll, 2);
    }

    #[test]
    fn moving_down_stops_at_last_entry() {
        let mut vp = Viewport::default();
        for _ in 0..10 {
            vp.move_down(3, 5);
        }
        assert_eq!(vp.selected, 2);
        assert_eq!(vp.scroll, 0);
    }

    #[test]
    fn moving_up_stops_at_zero() {
        let mut vp = Viewport::default();
        vp.move_up(5);
        assert_eq!(vp, Viewport::default());
    }

    #[test]
    fn moving_up_above_window_scrolls_back() {
        let mut vp = Viewport {
            selected: 6,
            scroll: 2,
        };
        for _ in 0..3 {
            vp.move_up(5);
        }
        assert_eq!(vp.selected, 3);
        assert_eq!(vp.scroll, 2);
        vp.move_up(5);
        assert_eq!(vp.selected, 2);
        assert_eq!(vp.scroll, 2);
        vp.move_up(5);
        assert_eq!(vp.selected, 1);
        assert_eq!(vp.scroll, 1);
    }

    #[test]
    fn empty_listing_keeps_cursor_at_zero() {
        let mut vp = Viewport::default();
        vp.move_down(0, 5);
        vp.move_up(5);
        assert_eq!(vp, Viewport::default());
    }

    #[test]
    fn shrinking_rows_pulls_window_down_to_selection() {
        let mut vp = Viewport {
            selected: 9,
            scroll: 5,
        };
        vp.fit(2);
        assert_eq!(vp.scroll, 8);
        assert_eq!(vp.selected, 9);
    }

    #[test]
    fn growing_rows_keeps_window_where_it_is() {
        let mut vp = Viewport {
            selected: 9,
            scroll: 5,
        };
        vp.fit(40);
        assert_eq!(vp.scroll, 5);
    }

    #[test]
    fn zero_rows_behaves_like_one() {
        let mut vp = Viewport::default();
        vp.move_down(4, 0);
        vp.move_down(4, 0);
        assert_eq!(vp.selected, 2);
        assert_eq!(vp.scroll, 2);
    }

    #[test]
    fn clamp_to_shrunken_listing() {
        let mut vp = Viewport {
            selected: 7,
            scroll: 4,
        };
        vp.clamp_to(3, 5);
        assert_eq!(vp.selected, 2);
        assert_eq!(vp.scroll, 2);
    }

    #[test]
    fn visible_range_is_bounded_by_len() {
        let vp = Viewport {
            selected: 8,
            scroll: 6,
        };
        assert_eq!(vp.visible_range(9, 5), 6..9);
        assert_eq!(vp.visible_range(0, 5), 0..0);
    }
}
