use thiserror::Error;

use crate::interaction::GesturePhase;

pub type GestureResult<T> = Result<T, GestureError>;

#[derive(Debug, Error)]
pub enum GestureError {
    #[error("invalid transform: scale={scale} must lie in [2^-1022, 2^1022]")]
    InvalidTransform { scale: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{operation} requires an active drag, current phase is {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: GesturePhase,
    },

    #[error("target view has been disposed")]
    ViewDisposed,
}
