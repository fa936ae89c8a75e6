use crate::error::{GestureError, GestureResult};

use super::GestureConfig;

pub(super) fn validate_gesture_config(config: GestureConfig) -> GestureResult<GestureConfig> {
    for (name, factor) in [
        ("zoom_in_factor", config.zoom_in_factor),
        ("zoom_out_factor", config.zoom_out_factor),
    ] {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GestureError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }
    if !config.min_scale.is_finite() || config.min_scale <= 0.0 {
        return Err(GestureError::InvalidData(
            "min_scale must be finite and > 0".to_owned(),
        ));
    }
    if !config.max_scale.is_finite() || config.max_scale < config.min_scale {
        return Err(GestureError::InvalidData(
            "max_scale must be finite and >= min_scale".to_owned(),
        ));
    }
    if !(config.min_scale..=config.max_scale).contains(&1.0) {
        return Err(GestureError::InvalidData(
            "scale bounds must contain the identity scale".to_owned(),
        ));
    }
    if !config.hit_tolerance_px.is_finite() || config.hit_tolerance_px < 0.0 {
        return Err(GestureError::InvalidData(
            "hit_tolerance_px must be finite and >= 0".to_owned(),
        ));
    }
    Ok(config)
}
