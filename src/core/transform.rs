use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::error::{GestureError, GestureResult};

/// Uniform-scale-plus-translation mapping `T(p) = scale * p + translate`.
///
/// Maps data space to screen space. `scale` always lies in
/// `[MIN_SCALE, MAX_SCALE]`, a range closed under reciprocal, so every
/// transform is invertible. Composition saturates at the range ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AffineTransformRepr", into = "AffineTransformRepr")]
pub struct AffineTransform {
    scale: f64,
    translate: Point,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct AffineTransformRepr {
    scale: f64,
    translate_x: f64,
    translate_y: f64,
}

impl TryFrom<AffineTransformRepr> for AffineTransform {
    type Error = GestureError;

    fn try_from(repr: AffineTransformRepr) -> GestureResult<Self> {
        Self::new(repr.scale, repr.translate_x, repr.translate_y)
    }
}

impl From<AffineTransform> for AffineTransformRepr {
    fn from(value: AffineTransform) -> Self {
        Self {
            scale: value.scale,
            translate_x: value.translate.x,
            translate_y: value.translate.y,
        }
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Point::ORIGIN,
    };

    /// Smallest representable scale (`2^-1022`).
    pub const MIN_SCALE: f64 = f64::MIN_POSITIVE;
    /// Largest representable scale (`2^1022`), the exact reciprocal of `MIN_SCALE`.
    pub const MAX_SCALE: f64 = 1.0 / f64::MIN_POSITIVE;

    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> GestureResult<Self> {
        validate_scale(scale)?;
        if !translate_x.is_finite() || !translate_y.is_finite() {
            return Err(GestureError::InvalidData(
                "transform translation must be finite".to_owned(),
            ));
        }
        Ok(Self {
            scale,
            translate: Point::new(translate_x, translate_y),
        })
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Pure translation by `offset`.
    #[must_use]
    pub const fn translation(offset: Point) -> Self {
        Self {
            scale: 1.0,
            translate: offset,
        }
    }

    /// Scaling by `factor` that keeps `pivot` fixed.
    pub fn scale_about_point(pivot: Point, factor: f64) -> GestureResult<Self> {
        validate_scale(factor)?;
        Ok(Self {
            scale: factor,
            translate: pivot.scaled(1.0 - factor),
        })
    }

    #[must_use]
    pub const fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub const fn translate(self) -> Point {
        self.translate
    }

    /// Returns `self ∘ inner`: applies `inner` first, then `self`.
    #[must_use]
    pub fn compose(self, inner: Self) -> Self {
        Self {
            scale: clamp_scale(self.scale * inner.scale),
            translate: self.translate + inner.translate.scaled(self.scale),
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        let inv = clamp_scale(1.0 / self.scale);
        Self {
            scale: inv,
            translate: self.translate.scaled(-inv),
        }
    }

    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        point.scaled(self.scale) + self.translate
    }

    /// Maps a screen point back into data space.
    #[must_use]
    pub fn apply_inverse(self, point: Point) -> Point {
        (point - self.translate).scaled(1.0 / self.scale)
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Component-wise comparison with separate scale and translation tolerances.
    #[must_use]
    pub fn approx_eq(self, other: Self, scale_tolerance: f64, translate_tolerance: f64) -> bool {
        (self.scale - other.scale).abs() <= scale_tolerance
            && (self.translate.x - other.translate.x).abs() <= translate_tolerance
            && (self.translate.y - other.translate.y).abs() <= translate_tolerance
    }
}

fn validate_scale(scale: f64) -> GestureResult<()> {
    if !(AffineTransform::MIN_SCALE..=AffineTransform::MAX_SCALE).contains(&scale) {
        return Err(GestureError::InvalidTransform { scale });
    }
    Ok(())
}

fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(AffineTransform::MIN_SCALE, AffineTransform::MAX_SCALE)
}
