//! Force model of the plate lattice.
//!
//! Each plate hangs between its four grid neighbors on springs of rest length
//! `L0`. A spring spanning horizontal separation `s` and vertical offset `Δz`
//! has length `sqrt(s² + Δz²)`; its tension is projected onto the vertical
//! axis through `sign(z_neighbor - z_self)`:
//!
//!   m d²z/dt² = Σ k (sqrt(s² + Δz²) - L0) sign(z_nb - z) - β dz/dt - m g

use crate::config::BridgeParams;
use crate::simulation::lattice::LatticeState;

/// Right-hand side of a first-order system over a lattice state.
pub trait Dynamics {
    /// Instantaneous rate of change of every entry of `state`.
    /// Must return a state of the same shape.
    fn derivative(&self, state: &LatticeState) -> LatticeState;
}

/// Spring/damping/gravity law for a lattice clamped at its first and last rows.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpringLattice {
    pub params: BridgeParams,
}

impl SpringLattice {
    pub fn new(params: BridgeParams) -> Self {
        Self { params }
    }

    /// Vertical pull of one spring on the plate at height `z` towards a
    /// neighbor at height `z_neighbor`, `separation` apart in the grid plane
    #[inline]
    fn spring_force(&self, z: f64, z_neighbor: f64, separation: f64) -> f64 {
        let dz = z - z_neighbor;
        let length = (separation * separation + dz * dz).sqrt();
        self.params.stiffness * (length - self.params.rest_length) * signum(z_neighbor - z)
    }

    /// Sum of spring pulls from the up to four neighbors of `(i, j)`
    fn spring_sum(&self, state: &LatticeState, i: usize, j: usize) -> f64 {
        let (m, n) = (state.rows(), state.cols());
        let z = state.displacement(i, j);
        let (dx, dy) = (self.params.dx, self.params.dy);

        let mut total = 0.0;
        if i > 0 {
            total += self.spring_force(z, state.displacement(i - 1, j), dy);
        }
        if i + 1 < m {
            total += self.spring_force(z, state.displacement(i + 1, j), dy);
        }
        if j > 0 {
            total += self.spring_force(z, state.displacement(i, j - 1), dx);
        }
        if j + 1 < n {
            total += self.spring_force(z, state.displacement(i, j + 1), dx);
        }
        total
    }

    /// Acceleration of a free plate
    fn acceleration(&self, state: &LatticeState, i: usize, j: usize) -> f64 {
        let p = &self.params;
        let force = self.spring_sum(state, i, j)
            - p.air_friction * state.velocity(i, j)
            - p.plate_mass * p.gravity;
        force / p.plate_mass
    }
}

impl Dynamics for SpringLattice {
    fn derivative(&self, state: &LatticeState) -> LatticeState {
        let (m, n) = (state.rows(), state.cols());
        // Starts at zero, so supports keep zero rate in both halves
        let mut rate = state.at_rest();

        for i in 1..m - 1 {
            for j in 0..n {
                let dz = state.velocity(i, j);
                let dv = self.acceleration(state, i, j);
                rate.set_plate(i, j, dz, dv);
            }
        }
        rate
    }
}

/// Three-valued sign: 0 at 0 (and for NaN), never divides.
#[inline]
fn signum(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
