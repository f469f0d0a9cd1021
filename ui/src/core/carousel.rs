//! Slide index state for the hero carousel.

/// Cadence of automatic advancement. Manual navigation neither pauses nor
/// resets it; the two compose, last write wins.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Current slide index. Every operation takes the live slide count and
/// reduces modulo it, so the index can never leave `[0, slide_count)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
}

impl CarouselState {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step forward, wrapping at the end. Autoplay and the "next" arrow
    /// share this.
    pub fn advance(&mut self, slide_count: usize) {
        if slide_count == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + 1) % slide_count;
    }

    /// Step backward, wrapping at the start.
    pub fn retreat(&mut self, slide_count: usize) {
        if slide_count == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + slide_count - 1) % slide_count;
    }

    /// Jump straight to a dot indicator. Out-of-range requests are ignored
    /// rather than clamped; the dots are generated from the same count.
    pub fn select(&mut self, index: usize, slide_count: usize) {
        if index < slide_count {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_at_the_end() {
        let mut state = CarouselState::default();
        state.advance(3);
        state.advance(3);
        assert_eq!(state.index(), 2);
        state.advance(3);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn retreat_wraps_at_the_start() {
        let mut state = CarouselState::default();
        state.retreat(3);
        assert_eq!(state.index(), 2);
        state.retreat(3);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut state = CarouselState::default();
        state.advance(1);
        state.retreat(1);
        state.select(0, 1);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn empty_slide_list_pins_the_index_to_zero() {
        let mut state = CarouselState::default();
        state.select(2, 3);
        state.advance(0);
        assert_eq!(state.index(), 0);
        state.retreat(0);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn select_ignores_out_of_range_dots() {
        let mut state = CarouselState::default();
        state.select(1, 3);
        assert_eq!(state.index(), 1);
        state.select(5, 3);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn tick_then_previous_then_tick() {
        // Autoplay tick, an immediate manual "previous", then the next tick
        // on the unchanged cadence.
        let mut state = CarouselState::default();
        state.advance(3);
        assert_eq!(state.index(), 1);
        state.retreat(3);
        assert_eq!(state.index(), 0);
        state.advance(3);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn index_stays_in_range_for_arbitrary_sequences() {
        for count in 1..=5 {
            let mut state = CarouselState::default();
            for step in 0..200 {
                match step % 4 {
                    0 => state.advance(count),
                    1 => state.retreat(count),
                    2 => state.select(step % (count + 2), count),
                    _ => state.advance(count),
                }
                assert!(state.index() < count, "index escaped [0, {count})");
            }
        }
    }
}
