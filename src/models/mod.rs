pub mod buffer;
pub mod outcome;
pub mod transform;

pub use buffer::{PixelBuffer, SourceImage};
pub use outcome::{ScanOutcome, ScanTelemetry};
pub use transform::Transform;
