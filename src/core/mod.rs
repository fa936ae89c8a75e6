pub mod samples;
pub mod transform;
pub mod types;

pub use samples::{Sample, SampleRef, VisibleSamples};
pub use transform::AffineTransform;
pub use types::Point;
