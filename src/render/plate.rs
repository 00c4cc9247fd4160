use crate::config::{PLATE_DEPTH, PLATE_THICKNESS, PLATE_WIDTH};
use crate::simulation::LatticeState;

/// GPU-compatible record for one plate prism.
///
/// Layout: 16 bytes total.
/// - origin: [f32; 3] = 12 bytes - grid position (row, column) and displacement
/// - thickness: f32 = 4 bytes - prism height
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlateInstance {
    /// Corner of the prism: [row * width, col * depth, z]
    pub origin: [f32; 3],

    /// Prism thickness along z
    pub thickness: f32,
}

impl PlateInstance {
    pub fn new(row: usize, col: usize, z: f64) -> Self {
        Self {
            origin: [row as f32 * PLATE_WIDTH, col as f32 * PLATE_DEPTH, z as f32],
            thickness: PLATE_THICKNESS,
        }
    }
}

/// One instance per plate, farthest first so an isometric painter can draw
/// them in order
pub fn plate_instances(state: &LatticeState) -> Vec<PlateInstance> {
    let (rows, cols) = (state.rows(), state.cols());
    let mut instances = Vec::with_capacity(rows * cols);
    for i in (0..rows).rev() {
        for j in (0..cols).rev() {
            instances.push(PlateInstance::new(i, j, state.displacement(i, j)));
        }
    }
    instances
}
