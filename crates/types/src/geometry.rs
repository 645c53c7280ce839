/// A vertical extent in document coordinates (pixels from the top).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(self) -> f32 {
        self.top + self.height.max(0.0)
    }
}

/// The part of the viewport in which a heading counts as "current".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f32,
    pub bottom: f32,
}

impl Band {
    /// Builds the band for a viewport scrolled to `scroll_top`, shrunk by
    /// `top_inset` pixels at the top and by `bottom_ratio` of the viewport
    /// height at the bottom.
    pub fn inset(scroll_top: f32, viewport_height: f32, top_inset: f32, bottom_ratio: f32) -> Self {
        let top = scroll_top + top_inset;
        let bottom = scroll_top + viewport_height * (1.0 - bottom_ratio.clamp(0.0, 1.0));
        Self {
            top,
            bottom: bottom.max(top),
        }
    }

    /// Whether any part of `span` lies inside the band.
    ///
    /// Zero-height spans intersect when their top edge is inside the band.
    pub fn intersects(self, span: Span) -> bool {
        if span.height <= 0.0 {
            return span.top >= self.top && span.top <= self.bottom;
        }
        span.top < self.bottom && span.bottom() > self.top
    }
}
