mod null_surface;

pub use null_surface::{NullSurface, SurfaceOp, SurfaceOpLog};

use crate::api::PieChartConfig;
use crate::core::PieSlice;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend hosting the pie chart.
///
/// Backends receive the fully materialized configuration and projected
/// slices; drawing, label measurement, and hit testing stay on their side
/// of the seam.
pub trait PieSurface {
    /// Applies a configuration and data set to the surface.
    fn apply(&mut self, config: &PieChartConfig, slices: &[PieSlice]) -> ChartResult<()>;

    /// Recomputes geometry for the existing surface after a host resize.
    fn relayout(&mut self) -> ChartResult<()>;

    /// Current drawable width in pixels, as used by label anchoring.
    fn width_px(&self) -> f64;

    /// Releases the drawable area. Called at most once, and only after the
    /// resize subscription is gone.
    fn release(&mut self);
}
