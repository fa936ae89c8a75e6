mod adapter;
mod callbacks;

pub use adapter::{GestureCommand, GestureCommands, Modifiers, PointerEvent, PointerEventAdapter};
pub use callbacks::GestureCallbacks;
pub use hit_test::{HitMatch, HitResult, HitTester};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{AffineTransform, Point};
use crate::error::{GestureError, GestureResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

/// Wheel/scroll direction of a single zoom tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Maps a raw scroll amount to a direction; `0` and NaN yield `None`.
    #[must_use]
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::In => 1,
            Self::Out => -1,
        }
    }
}

/// When a zoom tick is folded into the committed transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomCommitPolicy {
    /// Zoom accumulates in `pending_scale` and is only committed by the next
    /// `end_drag`. A reset discards it. The pivot is interpreted in the
    /// coordinate space in front of `committed`.
    #[default]
    Deferred,
    /// Each tick is folded into `committed` about the screen-space pivot.
    Immediate,
}

/// Zoom tuning shared by every gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Ticks that would push the effective scale below this are dropped.
    pub min_scale: f64,
    /// Ticks that would push the effective scale above this are dropped.
    pub max_scale: f64,
    pub commit: ZoomCommitPolicy,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            min_scale: 1e-6,
            max_scale: 1e6,
            commit: ZoomCommitPolicy::Deferred,
        }
    }
}

impl ZoomBehavior {
    #[must_use]
    pub fn factor(self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.zoom_in_factor,
            ZoomDirection::Out => self.zoom_out_factor,
        }
    }
}

/// Result of a single zoom tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOutcome {
    pub transform: AffineTransform,
    /// `false` when the tick was dropped by the scale bounds.
    pub applied: bool,
}

/// Per-view pan/zoom state machine.
///
/// The effective transform shown at any instant is
/// `committed ∘ pending_scale ∘ pending_translate`. Only `end_drag`,
/// `reset` and immediate-policy zoom ticks touch `committed`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    committed: AffineTransform,
    pending_scale: AffineTransform,
    pending_translate: AffineTransform,
    phase: GesturePhase,
    anchor: Point,
    zoom: ZoomBehavior,
}

impl GestureState {
    #[must_use]
    pub fn new(zoom: ZoomBehavior) -> Self {
        Self {
            zoom,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn committed(&self) -> AffineTransform {
        self.committed
    }

    #[must_use]
    pub fn pending_scale(&self) -> AffineTransform {
        self.pending_scale
    }

    #[must_use]
    pub fn pending_translate(&self) -> AffineTransform {
        self.pending_translate
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn zoom_behavior(&self) -> ZoomBehavior {
        self.zoom
    }

    pub fn set_zoom_behavior(&mut self, zoom: ZoomBehavior) {
        self.zoom = zoom;
    }

    #[must_use]
    pub fn effective_transform(&self) -> AffineTransform {
        self.committed
            .compose(self.pending_scale)
            .compose(self.pending_translate)
    }

    /// Starts (or restarts) a drag anchored at `point`.
    ///
    /// A drag that was already in flight loses its uncommitted translation.
    pub fn begin_drag(&mut self, point: Point) -> AffineTransform {
        debug!(x = point.x, y = point.y, previous = ?self.phase, "begin drag");
        self.phase = GesturePhase::Dragging;
        self.anchor = point;
        self.pending_translate = AffineTransform::IDENTITY;
        self.effective_transform()
    }

    pub fn update_drag(&mut self, point: Point) -> GestureResult<AffineTransform> {
        self.require_dragging("update_drag")?;
        self.pending_translate = AffineTransform::translation(point - self.anchor);
        trace!(x = point.x, y = point.y, "update drag");
        Ok(self.effective_transform())
    }

    pub fn end_drag(&mut self, point: Point) -> GestureResult<AffineTransform> {
        self.require_dragging("end_drag")?;
        let delta = AffineTransform::translation(point - self.anchor);
        self.committed = self.committed.compose(self.pending_scale.compose(delta));
        self.pending_scale = AffineTransform::IDENTITY;
        self.pending_translate = AffineTransform::IDENTITY;
        self.phase = GesturePhase::Idle;
        debug!(committed = ?self.committed, "end drag committed");
        Ok(self.committed)
    }

    /// Applies one zoom tick about `pivot`. Valid in any phase.
    pub fn zoom(&mut self, pivot: Point, direction: ZoomDirection) -> GestureResult<ZoomOutcome> {
        let step = AffineTransform::scale_about_point(pivot, self.zoom.factor(direction))?;
        let (committed, pending_scale) = match self.zoom.commit {
            ZoomCommitPolicy::Deferred => (self.committed, self.pending_scale.compose(step)),
            ZoomCommitPolicy::Immediate => (step.compose(self.committed), self.pending_scale),
        };

        let resulting_scale = committed.scale() * pending_scale.scale();
        if !(self.zoom.min_scale..=self.zoom.max_scale).contains(&resulting_scale) {
            debug!(
                resulting_scale,
                min_scale = self.zoom.min_scale,
                max_scale = self.zoom.max_scale,
                "dropping zoom tick outside scale bounds"
            );
            return Ok(ZoomOutcome {
                transform: self.effective_transform(),
                applied: false,
            });
        }

        self.committed = committed;
        self.pending_scale = pending_scale;
        trace!(
            pivot_x = pivot.x,
            pivot_y = pivot.y,
            direction = direction.sign(),
            "zoom tick"
        );
        Ok(ZoomOutcome {
            transform: self.effective_transform(),
            applied: true,
        })
    }

    /// Recenters the view: everything back to identity, phase `Idle`.
    pub fn reset(&mut self) -> AffineTransform {
        self.committed = AffineTransform::IDENTITY;
        self.pending_scale = AffineTransform::IDENTITY;
        self.pending_translate = AffineTransform::IDENTITY;
        self.phase = GesturePhase::Idle;
        debug!("reset view transform");
        AffineTransform::IDENTITY
    }

    fn require_dragging(&self, operation: &'static str) -> GestureResult<()> {
        if self.phase == GesturePhase::Dragging {
            Ok(())
        } else {
            Err(GestureError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }
}
