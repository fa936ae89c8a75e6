use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GestureError, GestureResult};
use crate::interaction::{ZoomBehavior, ZoomCommitPolicy};

use super::validation::validate_gesture_config;

pub const GESTURE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Public gesture engine configuration.
///
/// Serializable so hosts can persist tuning next to their own settings.
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default = "default_zoom_in_factor")]
    pub zoom_in_factor: f64,
    #[serde(default = "default_zoom_out_factor")]
    pub zoom_out_factor: f64,
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,
    #[serde(default)]
    pub zoom_commit: ZoomCommitPolicy,
    #[serde(default = "default_hit_tolerance_px")]
    pub hit_tolerance_px: f64,
    #[serde(default = "default_hover_debounce_ms")]
    pub hover_debounce_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct GestureConfigJsonContractV1 {
    schema_version: u32,
    config: GestureConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: default_zoom_in_factor(),
            zoom_out_factor: default_zoom_out_factor(),
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            zoom_commit: ZoomCommitPolicy::default(),
            hit_tolerance_px: default_hit_tolerance_px(),
            hover_debounce_ms: default_hover_debounce_ms(),
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn with_zoom_factors(mut self, zoom_in_factor: f64, zoom_out_factor: f64) -> Self {
        self.zoom_in_factor = zoom_in_factor;
        self.zoom_out_factor = zoom_out_factor;
        self
    }

    #[must_use]
    pub fn with_scale_bounds(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    #[must_use]
    pub fn with_zoom_commit(mut self, zoom_commit: ZoomCommitPolicy) -> Self {
        self.zoom_commit = zoom_commit;
        self
    }

    #[must_use]
    pub fn with_hit_tolerance_px(mut self, hit_tolerance_px: f64) -> Self {
        self.hit_tolerance_px = hit_tolerance_px;
        self
    }

    #[must_use]
    pub fn with_hover_debounce_ms(mut self, hover_debounce_ms: u64) -> Self {
        self.hover_debounce_ms = hover_debounce_ms;
        self
    }

    pub fn validate(self) -> GestureResult<Self> {
        validate_gesture_config(self)
    }

    #[must_use]
    pub fn zoom_behavior(self) -> ZoomBehavior {
        ZoomBehavior {
            zoom_in_factor: self.zoom_in_factor,
            zoom_out_factor: self.zoom_out_factor,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            commit: self.zoom_commit,
        }
    }

    #[must_use]
    pub fn hover_debounce(self) -> Duration {
        Duration::from_millis(self.hover_debounce_ms)
    }

    pub fn to_json_contract_v1_pretty(self) -> GestureResult<String> {
        let payload = GestureConfigJsonContractV1 {
            schema_version: GESTURE_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GestureError::InvalidData(format!("failed to serialize gesture config: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> GestureResult<Self> {
        let config = if let Ok(payload) = serde_json::from_str::<GestureConfigJsonContractV1>(input)
        {
            if payload.schema_version != GESTURE_CONFIG_JSON_SCHEMA_V1 {
                return Err(GestureError::InvalidData(format!(
                    "unsupported gesture config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_str::<Self>(input).map_err(|e| {
                GestureError::InvalidData(format!("failed to parse gesture config json: {e}"))
            })?
        };
        let config = config.validate()?;
        debug!(?config, "loaded gesture config");
        Ok(config)
    }
}

fn default_zoom_in_factor() -> f64 {
    1.1
}

fn default_zoom_out_factor() -> f64 {
    0.9
}

fn default_min_scale() -> f64 {
    1e-6
}

fn default_max_scale() -> f64 {
    1e6
}

fn default_hit_tolerance_px() -> f64 {
    10.0
}

fn default_hover_debounce_ms() -> u64 {
    10
}
