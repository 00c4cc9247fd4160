mod heightmap;
mod plate;

pub use heightmap::HeightmapRenderer;
pub use plate::{plate_instances, PlateInstance};

use crate::error::RenderError;
use crate::simulation::LatticeState;

/// Consumer of lattice snapshots, called once per integration step.
///
/// Failures are reported back to the caller, which logs them; they never
/// reach the kernel.
pub trait Renderer {
    fn draw(
        &mut self,
        rows: usize,
        cols: usize,
        state: &LatticeState,
    ) -> Result<(), RenderError>;
}

/// Check that `state` really is a `rows x cols` lattice
pub(crate) fn check_frame(
    rows: usize,
    cols: usize,
    state: &LatticeState,
) -> Result<(), RenderError> {
    if state.rows() == rows && state.cols() == cols {
        Ok(())
    } else {
        Err(RenderError::Dimensions { rows, cols })
    }
}
