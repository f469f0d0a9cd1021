//! Scroll-triggered reveal predicate.
//!
//! An element is "revealed" exactly when its most recent viewport
//! intersection ratio meets the section's configured threshold. The effect
//! is symmetric: scrolling an element back out of view un-reveals it, so
//! the fade-in replays the next time it enters.

/// Thresholds used across the site. Dividers reveal early; denser content
/// waits until a larger share is on screen.
pub const DIVIDER_THRESHOLD: f64 = 0.1;
pub const ABOUT_PAGE_THRESHOLD: f64 = 0.15;
pub const SECTION_THRESHOLD: f64 = 0.2;

/// True iff `ratio` meets `threshold`. The boundary is inclusive, matching
/// the observer configuration that fires the callback at the threshold
/// crossing itself.
pub fn is_revealed(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        assert!(is_revealed(0.2, SECTION_THRESHOLD));
        assert!(!is_revealed(0.199, SECTION_THRESHOLD));
        assert!(is_revealed(1.0, SECTION_THRESHOLD));
        assert!(!is_revealed(0.0, DIVIDER_THRESHOLD));
    }

    #[test]
    fn latest_observation_wins() {
        // Fold a back-and-forth scroll history down to the final flag; only
        // the last observation may matter.
        let history = [0.0, 0.25, 0.05, 0.9, 0.1, 0.2];
        let revealed = history
            .iter()
            .fold(false, |_, &ratio| is_revealed(ratio, SECTION_THRESHOLD));
        assert!(revealed);

        let history = [0.9, 0.2, 0.19];
        let revealed = history
            .iter()
            .fold(false, |_, &ratio| is_revealed(ratio, SECTION_THRESHOLD));
        assert!(!revealed);
    }
}
