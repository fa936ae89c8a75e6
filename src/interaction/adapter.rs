use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::Point;
use crate::render::DisplayMode;

use super::{GesturePhase, ZoomDirection};

/// Device-independent pointer input, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Press(Point),
    /// `timestamp` is measured from any fixed, monotonic origin.
    Move {
        position: Point,
        timestamp: Duration,
    },
    Release(Point),
    Wheel {
        position: Point,
        delta: f64,
    },
    /// Touch tap recognized by the host without press/release pairs.
    Tap(Point),
    /// Focus or pointer capture lost; ends any drag in progress.
    CaptureLost,
    /// Pointer left the surface.
    Leave,
}

impl PointerEvent {
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Press(p) | Self::Release(p) | Self::Tap(p) => Some(p),
            Self::Move { position, .. } | Self::Wheel { position, .. } => Some(position),
            Self::CaptureLost | Self::Leave => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// "Show all labels" modifier.
    pub shift: bool,
}

/// Uniform gesture vocabulary produced from raw pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureCommand {
    BeginDrag(Point),
    UpdateDrag(Point),
    EndDrag(Point),
    Reset(Point),
    Zoom {
        pivot: Point,
        direction: ZoomDirection,
    },
    Probe(Point),
    ClearTooltip,
    SetDisplayMode(DisplayMode),
}

pub type GestureCommands = SmallVec<[GestureCommand; 3]>;

/// Turns press/move/release/wheel streams into [`GestureCommand`]s.
///
/// The adapter owns only input bookkeeping; the gesture phase is read from
/// the caller's `GestureState` so there is one source of truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEventAdapter {
    hover_debounce: Duration,
    down: bool,
    press_point: Point,
    last_point: Point,
    last_probe_at: Option<Duration>,
    display_mode: DisplayMode,
}

impl Default for PointerEventAdapter {
    fn default() -> Self {
        Self::new(Duration::from_millis(10))
    }
}

impl PointerEventAdapter {
    #[must_use]
    pub fn new(hover_debounce: Duration) -> Self {
        Self {
            hover_debounce,
            down: false,
            press_point: Point::ORIGIN,
            last_point: Point::ORIGIN,
            last_probe_at: None,
            display_mode: DisplayMode::Normal,
        }
    }

    #[must_use]
    pub fn is_down(&self) -> bool {
        self.down
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    #[must_use]
    pub fn hover_debounce(&self) -> Duration {
        self.hover_debounce
    }

    pub fn set_hover_debounce(&mut self, hover_debounce: Duration) {
        self.hover_debounce = hover_debounce;
    }

    /// Recomputes the display mode from `modifiers`. Returns the command to
    /// emit when it changed.
    pub fn sync_modifiers(&mut self, modifiers: Modifiers) -> Option<GestureCommand> {
        let wanted = if modifiers.shift {
            DisplayMode::AllLabels
        } else {
            DisplayMode::Normal
        };
        if wanted == self.display_mode {
            return None;
        }
        self.display_mode = wanted;
        Some(GestureCommand::SetDisplayMode(wanted))
    }

    /// Modifier state is re-read on every event, so a display mode change
    /// lands before whatever the event itself produces.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        phase: GesturePhase,
        modifiers: Modifiers,
    ) -> GestureCommands {
        let mut commands = GestureCommands::new();
        commands.extend(self.sync_modifiers(modifiers));
        match event {
            PointerEvent::Press(point) => {
                if phase == GesturePhase::Dragging {
                    commands.push(GestureCommand::EndDrag(self.last_point));
                }
                self.down = true;
                self.press_point = point;
                self.last_point = point;
            }
            PointerEvent::Move {
                position,
                timestamp,
            } => {
                if self.down {
                    self.drag_move(position, phase, &mut commands);
                } else {
                    self.hover_move(position, timestamp, modifiers, &mut commands);
                }
            }
            PointerEvent::Release(point) => {
                if !self.down {
                    return commands;
                }
                self.down = false;
                self.last_point = point;
                if point == self.press_point {
                    commands.push(GestureCommand::Reset(point));
                } else {
                    if phase == GesturePhase::Idle {
                        commands.push(GestureCommand::BeginDrag(self.press_point));
                    }
                    commands.push(GestureCommand::EndDrag(point));
                }
            }
            PointerEvent::Wheel { position, delta } => {
                if let Some(direction) = ZoomDirection::from_delta(delta) {
                    commands.push(GestureCommand::Zoom {
                        pivot: position,
                        direction,
                    });
                }
            }
            PointerEvent::Tap(point) => {
                self.down = false;
                commands.push(GestureCommand::Reset(point));
            }
            PointerEvent::CaptureLost => {
                self.down = false;
                if phase == GesturePhase::Dragging {
                    commands.push(GestureCommand::EndDrag(self.last_point));
                }
            }
            PointerEvent::Leave => {
                self.last_probe_at = None;
                commands.push(GestureCommand::ClearTooltip);
            }
        }
        commands
    }

    fn drag_move(&mut self, position: Point, phase: GesturePhase, commands: &mut GestureCommands) {
        self.last_point = position;
        if phase == GesturePhase::Idle {
            if position == self.press_point {
                return;
            }
            commands.push(GestureCommand::BeginDrag(self.press_point));
        }
        commands.push(GestureCommand::UpdateDrag(position));
    }

    fn hover_move(
        &mut self,
        position: Point,
        timestamp: Duration,
        modifiers: Modifiers,
        commands: &mut GestureCommands,
    ) {
        self.last_point = position;
        if modifiers.shift {
            return;
        }

        let due = match self.last_probe_at {
            // A clock that moved backwards restarts the window.
            Some(last) if timestamp >= last => timestamp - last >= self.hover_debounce,
            _ => true,
        };
        if !due {
            trace!(?timestamp, "hover probe debounced");
            return;
        }
        self.last_probe_at = Some(timestamp);
        commands.push(GestureCommand::Probe(position));
    }
}
