use std::cell::RefCell;
use std::rc::Rc;

use crate::api::PieChartConfig;
use crate::core::{PieSlice, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::PieSurface;

/// One recorded backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    Apply,
    Relayout,
    Release,
}

/// Shared call log. The view consumes the surface on activation, so tests
/// keep a clone of this handle to assert call order after deactivation.
pub type SurfaceOpLog = Rc<RefCell<Vec<SurfaceOp>>>;

/// No-op surface used by tests and headless hosts.
///
/// It draws nothing, but still rejects an invalid viewport on apply so
/// tests can exercise the failed-activation path, and records every
/// backend call plus the last applied slice count.
#[derive(Debug)]
pub struct NullSurface {
    viewport: Viewport,
    log: SurfaceOpLog,
    pub last_slice_count: usize,
}

impl NullSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_log(viewport, SurfaceOpLog::default())
    }

    #[must_use]
    pub fn with_log(viewport: Viewport, log: SurfaceOpLog) -> Self {
        Self {
            viewport,
            log,
            last_slice_count: 0,
        }
    }

    #[must_use]
    pub fn log(&self) -> SurfaceOpLog {
        Rc::clone(&self.log)
    }
}

impl PieSurface for NullSurface {
    fn apply(&mut self, _config: &PieChartConfig, slices: &[PieSlice]) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.last_slice_count = slices.len();
        self.log.borrow_mut().push(SurfaceOp::Apply);
        Ok(())
    }

    fn relayout(&mut self) -> ChartResult<()> {
        self.log.borrow_mut().push(SurfaceOp::Relayout);
        Ok(())
    }

    fn width_px(&self) -> f64 {
        f64::from(self.viewport.width)
    }

    fn release(&mut self) {
        self.log.borrow_mut().push(SurfaceOp::Release);
    }
}
