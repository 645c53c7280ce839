//! Scroll-spy: which heading is "current" for a given scroll position.
//!
//! Headings are tested against a band of the viewport that starts below the
//! fixed header and ends part-way down the screen. Like an intersection
//! observer, only headings that *enter* the band produce an activation.
//! When several enter in the same update, the top-most one wins.

use reportview_types::{AnchorId, Band, Span};

pub const DEFAULT_TOP_INSET: f32 = 80.0;
pub const DEFAULT_BOTTOM_RATIO: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpyConfig {
    /// Pixels hidden under the fixed header.
    pub top_inset: f32,
    /// Fraction of the viewport height cut from the bottom of the band.
    pub bottom_ratio: f32,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            top_inset: DEFAULT_TOP_INSET,
            bottom_ratio: DEFAULT_BOTTOM_RATIO,
        }
    }
}

#[derive(Debug, Clone)]
struct Observed {
    anchor: AnchorId,
    span: Span,
    intersecting: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    config: ScrollSpyConfig,
    observed: Vec<Observed>,
}

impl ScrollSpy {
    pub fn new(config: ScrollSpyConfig, headings: impl IntoIterator<Item = (AnchorId, Span)>) -> Self {
        let observed = headings
            .into_iter()
            .map(|(anchor, span)| Observed {
                anchor,
                span,
                intersecting: false,
            })
            .collect();
        Self { config, observed }
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Headings currently inside the band, top-most first.
    pub fn intersecting(&self) -> Vec<&AnchorId> {
        let mut hits: Vec<&Observed> = self.observed.iter().filter(|o| o.intersecting).collect();
        hits.sort_by(|a, b| a.span.top.total_cmp(&b.span.top));
        hits.into_iter().map(|o| &o.anchor).collect()
    }

    /// Updates intersection state for a new scroll position and returns the
    /// heading to activate, if any heading entered the band.
    pub fn observe(&mut self, scroll_top: f32, viewport_height: f32) -> Option<AnchorId> {
        let band = Band::inset(
            scroll_top,
            viewport_height,
            self.config.top_inset,
            self.config.bottom_ratio,
        );

        let mut winner: Option<(f32, usize)> = None;
        for (i, o) in self.observed.iter_mut().enumerate() {
            let now = band.intersects(o.span);
            let entered = now && !o.intersecting;
            o.intersecting = now;
            if entered && winner.is_none_or(|(top, _)| o.span.top < top) {
                winner = Some((o.span.top, i));
            }
        }

        winner.map(|(_, i)| self.observed[i].anchor.clone())
    }
}

/// New scroll offset that brings `item` fully into a scroll container with
/// the nearest-edge rule, or `None` when it is already visible.
///
/// Items taller than the container are aligned to the top.
pub fn nearest_scroll_offset(item: Span, scroll_top: f32, container_height: f32) -> Option<f32> {
    let visible_bottom = scroll_top + container_height;
    if item.top < scroll_top || item.height > container_height {
        if item.top == scroll_top {
            return None;
        }
        Some(item.top)
    } else if item.bottom() > visible_bottom {
        Some(item.bottom() - container_height)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy(tops: &[(&str, f32)]) -> ScrollSpy {
        ScrollSpy::new(
            ScrollSpyConfig::default(),
            tops.iter()
                .map(|(id, top)| (AnchorId::from(*id), Span::new(*top, 30.0))),
        )
    }

    #[test]
    fn test_heading_in_band_activates() {
        let mut spy = spy(&[("intro", 100.0), ("market", 1200.0)]);
        // viewport 1000px: band is [80, 400]
        assert_eq!(spy.observe(0.0, 1000.0), Some(AnchorId::from("intro")));
    }

    #[test]
    fn test_no_activation_without_entry() {
        let mut spy = spy(&[("intro", 100.0), ("market", 1200.0)]);
        spy.observe(0.0, 1000.0);
        // still inside, nothing new entered
        assert_eq!(spy.observe(10.0, 1000.0), None);
        // band [480, 800]: intro left, nothing entered
        assert_eq!(spy.observe(400.0, 1000.0), None);
    }

    #[test]
    fn test_scrolling_down_activates_next() {
        let mut spy = spy(&[("intro", 100.0), ("market", 1200.0)]);
        spy.observe(0.0, 1000.0);
        // band [1180, 1500]
        assert_eq!(spy.observe(1100.0, 1000.0), Some(AnchorId::from("market")));
    }

    #[test]
    fn test_topmost_wins_when_several_enter() {
        let mut spy = spy(&[("a", 100.0), ("c", 300.0), ("b", 200.0)]);
        assert_eq!(spy.observe(0.0, 1000.0), Some(AnchorId::from("a")));
        let hits: Vec<_> = spy.intersecting().into_iter().map(|a| a.as_str()).collect();
        assert_eq!(hits, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_heading_below_forty_percent_is_not_current() {
        let mut spy = spy(&[("deep", 500.0)]);
        // band [80, 400] for a 1000px viewport
        assert_eq!(spy.observe(0.0, 1000.0), None);
    }

    #[test]
    fn test_heading_under_fixed_header_is_not_current() {
        let mut spy = spy(&[("hidden", 1000.0)]);
        // band [1080, 1400]; heading spans [1000, 1030]
        assert_eq!(spy.observe(1000.0, 1000.0), None);
    }

    #[test]
    fn test_nearest_scroll_offset() {
        // visible [100, 300]
        assert_eq!(nearest_scroll_offset(Span::new(150.0, 20.0), 100.0, 200.0), None);
        assert_eq!(nearest_scroll_offset(Span::new(50.0, 20.0), 100.0, 200.0), Some(50.0));
        assert_eq!(nearest_scroll_offset(Span::new(290.0, 20.0), 100.0, 200.0), Some(110.0));
        assert_eq!(nearest_scroll_offset(Span::new(500.0, 400.0), 100.0, 200.0), Some(500.0));
    }
}
