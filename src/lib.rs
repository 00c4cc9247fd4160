//! Spring-mass model of a vibrating bridge deck.
//!
//! A grid of plates, clamped along its first and last rows, coupled to its
//! nearest neighbors by springs and advanced with fixed-step RK4.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod render;
pub mod simulation;

pub use config::{BridgeParams, SimConfig};
pub use error::{RenderError, SimError, SimResult};
pub use simulation::{
    Dynamics, LatticeState, Matrix, Rk4Stepper, SimStatus, SimulationHandle, SpringLattice,
};
