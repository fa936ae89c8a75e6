//! Redraw contract between the gesture engine and the host renderer.
//!
//! The engine never paints. It emits [`RedrawRequest`]s; hosts may coalesce
//! them per frame with [`FrameCoalescer`] as long as none is silently lost.

use serde::{Deserialize, Serialize};

use crate::core::AffineTransform;

/// Label presentation requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Labels appear only through the hover tooltip.
    #[default]
    Normal,
    /// Every visible sample is labelled (modifier held).
    AllLabels,
}

/// Idempotent invalidate signal carrying the state to paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedrawRequest {
    pub transform: AffineTransform,
    pub display_mode: DisplayMode,
}

/// Merges redraw requests raised between two paints into one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCoalescer {
    latest: Option<RedrawRequest>,
    merged: u32,
    total: u64,
}

impl FrameCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: RedrawRequest) {
        if self.latest.is_some() {
            self.merged = self.merged.saturating_add(1);
        }
        self.latest = Some(request);
        self.total = self.total.saturating_add(1);
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.latest.is_some()
    }

    /// Number of requests folded into the pending frame beyond the first.
    #[must_use]
    pub fn merged_count(&self) -> u32 {
        self.merged
    }

    /// Requests received since construction, merged or not.
    #[must_use]
    pub fn total_requests(&self) -> u64 {
        self.total
    }

    /// Takes the request to paint this frame, if any.
    pub fn take_frame(&mut self) -> Option<RedrawRequest> {
        self.merged = 0;
        self.latest.take()
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayMode, FrameCoalescer, RedrawRequest};
    use crate::core::{AffineTransform, Point};

    fn request(dx: f64) -> RedrawRequest {
        RedrawRequest {
            transform: AffineTransform::translation(Point::new(dx, 0.0)),
            display_mode: DisplayMode::Normal,
        }
    }

    #[test]
    fn frame_keeps_latest_request_and_counts_merges() {
        let mut coalescer = FrameCoalescer::new();
        assert!(coalescer.take_frame().is_none());

        coalescer.push(request(1.0));
        coalescer.push(request(2.0));
        coalescer.push(request(3.0));
        assert!(coalescer.has_pending());
        assert_eq!(coalescer.merged_count(), 2);
        assert_eq!(coalescer.total_requests(), 3);

        let frame = coalescer.take_frame().expect("pending frame");
        assert_eq!(frame, request(3.0));
        assert!(!coalescer.has_pending());
        assert_eq!(coalescer.merged_count(), 0);
    }
}
