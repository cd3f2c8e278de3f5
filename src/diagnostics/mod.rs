//! Reports returned by the segmenter: stage outputs plus timings.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, PaletteCoverage, SegmentationReport};
pub use timing::{StageTiming, TimingBreakdown};
