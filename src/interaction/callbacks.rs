use std::fmt;

use crate::core::Point;

use super::ZoomDirection;

type DragCallback = Box<dyn FnMut(Point, Point)>;
type PointCallback = Box<dyn FnMut(Point)>;
type ZoomCallback = Box<dyn FnMut(Point, ZoomDirection)>;

/// Optional gesture observers registered by the host.
///
/// Every slot may be left empty; firing an empty slot does nothing.
#[derive(Default)]
pub struct GestureCallbacks {
    on_drag_update: Option<DragCallback>,
    on_drag_end: Option<DragCallback>,
    on_tap_or_reset: Option<PointCallback>,
    on_zoom: Option<ZoomCallback>,
}

impl GestureCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with `(anchor, current)` on every drag update.
    #[must_use]
    pub fn on_drag_update(mut self, callback: impl FnMut(Point, Point) + 'static) -> Self {
        self.on_drag_update = Some(Box::new(callback));
        self
    }

    /// Called with `(anchor, release)` once a drag is committed.
    #[must_use]
    pub fn on_drag_end(mut self, callback: impl FnMut(Point, Point) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(callback));
        self
    }

    /// Called with the tap position when a click/tap resets the view.
    #[must_use]
    pub fn on_tap_or_reset(mut self, callback: impl FnMut(Point) + 'static) -> Self {
        self.on_tap_or_reset = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_zoom(mut self, callback: impl FnMut(Point, ZoomDirection) + 'static) -> Self {
        self.on_zoom = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.on_drag_update.is_none()
            && self.on_drag_end.is_none()
            && self.on_tap_or_reset.is_none()
            && self.on_zoom.is_none()
    }

    pub(crate) fn fire_drag_update(&mut self, from: Point, to: Point) {
        if let Some(callback) = self.on_drag_update.as_mut() {
            callback(from, to);
        }
    }

    pub(crate) fn fire_drag_end(&mut self, from: Point, to: Point) {
        if let Some(callback) = self.on_drag_end.as_mut() {
            callback(from, to);
        }
    }

    pub(crate) fn fire_tap_or_reset(&mut self, point: Point) {
        if let Some(callback) = self.on_tap_or_reset.as_mut() {
            callback(point);
        }
    }

    pub(crate) fn fire_zoom(&mut self, pivot: Point, direction: ZoomDirection) {
        if let Some(callback) = self.on_zoom.as_mut() {
            callback(pivot, direction);
        }
    }
}

impl fmt::Debug for GestureCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureCallbacks")
            .field("on_drag_update", &self.on_drag_update.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("on_tap_or_reset", &self.on_tap_or_reset.is_some())
            .field("on_zoom", &self.on_zoom.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::GestureCallbacks;
    use crate::core::Point;
    use crate::interaction::ZoomDirection;

    #[test]
    fn empty_bundle_fires_without_effect() {
        let mut callbacks = GestureCallbacks::new();
        assert!(callbacks.is_empty());
        callbacks.fire_drag_update(Point::ORIGIN, Point::new(1.0, 1.0));
        callbacks.fire_drag_end(Point::ORIGIN, Point::new(1.0, 1.0));
        callbacks.fire_tap_or_reset(Point::ORIGIN);
        callbacks.fire_zoom(Point::ORIGIN, ZoomDirection::In);
    }

    #[test]
    fn registered_slot_receives_arguments() {
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        let mut callbacks = GestureCallbacks::new()
            .on_zoom(move |pivot, direction| sink.set(Some((pivot, direction))));
        assert!(!callbacks.is_empty());

        callbacks.fire_zoom(Point::new(3.0, 4.0), ZoomDirection::Out);
        assert_eq!(seen.get(), Some((Point::new(3.0, 4.0), ZoomDirection::Out)));
    }
}
