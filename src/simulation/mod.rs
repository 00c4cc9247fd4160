mod dynamics;
mod handle;
pub(crate) mod lattice;
mod matrix;
mod stepper;

pub use dynamics::{Dynamics, SpringLattice};
pub use handle::{SimStatus, SimulationHandle};
pub use lattice::LatticeState;
pub use matrix::Matrix;
pub use stepper::Rk4Stepper;
