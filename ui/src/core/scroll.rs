//! Hide-on-scroll-down state for the navbar.

/// The navbar never hides until the page has scrolled past this offset, so
/// it stays put near the top regardless of scroll direction.
pub const NAVBAR_HIDE_OFFSET_PX: f64 = 80.0;

/// Derived purely from successive scroll offsets; owned by the mounted
/// navbar and discarded with it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollState {
    last_y: f64,
    hidden: bool,
}

impl ScrollState {
    /// Feed the current scroll offset. Hidden only when the offset is both
    /// strictly increasing and past [`NAVBAR_HIDE_OFFSET_PX`]; any
    /// non-increasing step shows the bar again. The reference offset
    /// updates unconditionally.
    pub fn observe(&mut self, y: f64) {
        self.hidden = y > self.last_y && y > NAVBAR_HIDE_OFFSET_PX;
        self.last_y = y;
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(steps: &[f64]) -> ScrollState {
        let mut state = ScrollState::default();
        for &y in steps {
            state.observe(y);
        }
        state
    }

    #[test]
    fn stays_visible_near_the_top() {
        // Increasing, but never past the offset threshold.
        assert!(!run(&[10.0, 40.0, 79.0]).hidden());
        assert!(!run(&[0.0, 80.0]).hidden());
    }

    #[test]
    fn hides_on_an_increasing_step_past_the_threshold() {
        assert!(run(&[40.0, 120.0]).hidden());
        assert!(run(&[500.0, 501.0]).hidden());
    }

    #[test]
    fn any_non_increasing_step_shows_the_bar() {
        // Scrolling back up, even far below the page top.
        assert!(!run(&[40.0, 120.0, 119.0]).hidden());
        // A repeated offset counts as non-increasing.
        assert!(!run(&[40.0, 120.0, 120.0]).hidden());
    }

    #[test]
    fn history_length_does_not_matter() {
        let mut long = vec![0.0];
        for i in 1..1000 {
            long.push(f64::from(i));
        }
        assert!(run(&long).hidden());

        long.push(3.0);
        assert!(!run(&long).hidden());
        long.push(400.0);
        assert!(run(&long).hidden());
    }

    #[test]
    fn first_event_past_the_threshold_hides() {
        // last_y starts at 0, so a deep initial offset is an increase.
        assert!(run(&[300.0]).hidden());
        assert!(!run(&[50.0]).hidden());
    }
}
