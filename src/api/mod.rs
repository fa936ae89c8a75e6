mod config;
mod host;
mod ui_queue;
mod validation;

pub use config::{GESTURE_CONFIG_JSON_SCHEMA_V1, GestureConfig};
pub use host::{ChartHost, NullHost};
pub use ui_queue::{UiTaskQueue, UiTaskSender};

use tracing::{debug, trace, warn};

use crate::core::{AffineTransform, Point};
use crate::error::GestureResult;
use crate::interaction::{
    GestureCallbacks, GestureCommand, GesturePhase, GestureState, HitResult, HitTester,
    PointerEvent, PointerEventAdapter,
};
use crate::render::{DisplayMode, RedrawRequest};

/// Work posted from another thread to run against a view on the UI thread.
pub type UiTask<H> = Box<dyn FnOnce(&mut ChartView<H>) + Send>;

/// One chart surface: gesture state, input adapter and hit-tester bound to a host.
///
/// Each view owns its own state, so several surfaces can be live at once.
#[derive(Debug)]
pub struct ChartView<H: ChartHost> {
    host: H,
    config: GestureConfig,
    gesture: GestureState,
    adapter: PointerEventAdapter,
    hit_tester: HitTester,
    callbacks: GestureCallbacks,
    tasks: UiTaskQueue<UiTask<H>>,
}

impl<H: ChartHost> ChartView<H> {
    pub fn new(host: H, config: GestureConfig) -> GestureResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            host,
            config,
            gesture: GestureState::new(config.zoom_behavior()),
            adapter: PointerEventAdapter::new(config.hover_debounce()),
            hit_tester: HitTester::new(config.hit_tolerance_px)?,
            callbacks: GestureCallbacks::default(),
            tasks: UiTaskQueue::new(),
        })
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Applies new tuning. Gesture progress and the committed transform survive.
    pub fn set_config(&mut self, config: GestureConfig) -> GestureResult<()> {
        let config = config.validate()?;
        self.hit_tester = HitTester::new(config.hit_tolerance_px)?;
        self.gesture.set_zoom_behavior(config.zoom_behavior());
        self.adapter.set_hover_debounce(config.hover_debounce());
        self.config = config;
        Ok(())
    }

    /// Replaces the registered gesture callbacks.
    pub fn set_callbacks(&mut self, callbacks: GestureCallbacks) {
        self.callbacks = callbacks;
    }

    #[must_use]
    pub fn gesture_state(&self) -> &GestureState {
        &self.gesture
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.adapter.display_mode()
    }

    #[must_use]
    pub fn current_transform(&self) -> AffineTransform {
        self.gesture.effective_transform()
    }

    pub fn request_redraw(&mut self) {
        let request = RedrawRequest {
            transform: self.current_transform(),
            display_mode: self.adapter.display_mode(),
        };
        self.host.request_redraw(request);
    }

    /// External "reset view" action. Does not fire the tap callback.
    pub fn reset_transform(&mut self) {
        self.gesture.reset();
        self.request_redraw();
    }

    /// Hit-tests `screen` against the host's visible samples.
    #[must_use]
    pub fn probe(&self, screen: Point) -> HitResult {
        self.hit_tester
            .probe(screen, self.current_transform(), self.host.visible_samples())
    }

    /// Entry point for native pointer input forwarded by the host.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        if let Some(position) = event.position() {
            if !position.is_finite() {
                warn!(?event, "dropping pointer event with non-finite position");
                return;
            }
        }
        let modifiers = self.host.modifiers();
        let commands = self
            .adapter
            .handle(event, self.gesture.phase(), modifiers);
        for command in commands {
            self.apply_command(command);
        }
    }

    /// Keyboard-only modifier change reported by the host. Pointer events
    /// re-read modifiers themselves.
    pub fn modifiers_changed(&mut self) {
        if let Some(command) = self.adapter.sync_modifiers(self.host.modifiers()) {
            self.apply_command(command);
        }
    }

    /// Handle for worker threads. Posting fails with
    /// [`crate::GestureError::ViewDisposed`] once this view is dropped.
    #[must_use]
    pub fn task_sender(&self) -> UiTaskSender<UiTask<H>> {
        self.tasks.sender()
    }

    /// Runs every task posted since the last call. Tasks posted while this
    /// runs wait for the next call.
    pub fn run_ui_tasks(&mut self) -> usize {
        let pending = self.tasks.drain();
        let handled = pending.len();
        for task in pending {
            task(self);
        }
        if handled > 0 {
            trace!(handled, "ran ui tasks");
        }
        handled
    }

    fn apply_command(&mut self, command: GestureCommand) {
        match command {
            GestureCommand::BeginDrag(point) => {
                self.gesture.begin_drag(point);
            }
            GestureCommand::UpdateDrag(point) => match self.gesture.update_drag(point) {
                Ok(_) => {
                    self.callbacks
                        .fire_drag_update(self.gesture.anchor(), point);
                    self.request_redraw();
                }
                Err(err) => warn!(error = %err, "dropping drag update"),
            },
            GestureCommand::EndDrag(point) => {
                let anchor = self.gesture.anchor();
                match self.gesture.end_drag(point) {
                    Ok(_) => {
                        self.callbacks.fire_drag_end(anchor, point);
                        self.request_redraw();
                    }
                    Err(err) => warn!(error = %err, "dropping drag end"),
                }
            }
            GestureCommand::Reset(point) => {
                self.gesture.reset();
                self.callbacks.fire_tap_or_reset(point);
                self.request_redraw();
            }
            GestureCommand::Zoom { pivot, direction } => {
                match self.gesture.zoom(pivot, direction) {
                    Ok(outcome) => {
                        if outcome.applied {
                            self.callbacks.fire_zoom(pivot, direction);
                        }
                    }
                    Err(err) => warn!(error = %err, "zoom tick rejected"),
                }
                self.request_redraw();
            }
            GestureCommand::Probe(point) => {
                let result = self.probe(point);
                trace!(x = point.x, y = point.y, hit = result.is_match(), "hover probe");
                self.host.show_tooltip(result.label());
            }
            GestureCommand::ClearTooltip => self.host.show_tooltip(None),
            GestureCommand::SetDisplayMode(mode) => {
                debug!(?mode, "display mode changed");
                self.request_redraw();
            }
        }
    }
}
