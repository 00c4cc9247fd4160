use crate::config::validate_step_size;
use crate::error::SimResult;
use crate::simulation::dynamics::Dynamics;
use crate::simulation::lattice::LatticeState;

/// Fixed-step classical Runge-Kutta integrator.
pub struct Rk4Stepper<D: Dynamics> {
    dynamics: D,
    h: f64,
}

impl<D: Dynamics> Rk4Stepper<D> {
    pub fn new(dynamics: D, h: f64) -> SimResult<Self> {
        validate_step_size(h)?;
        Ok(Self { dynamics, h })
    }

    pub fn step_size(&self) -> f64 {
        self.h
    }

    pub fn dynamics(&self) -> &D {
        &self.dynamics
    }

    /// Advance `state` from `t` to `t + h`.
    ///
    /// ```text
    /// k1 = f(x)
    /// k2 = f(x + h/2 k1)
    /// k3 = f(x + h/2 k2)
    /// k4 = f(x + h k3)
    /// x' = x + h/6 (k1 + 2 k2 + 2 k3 + k4)
    /// ```
    ///
    /// The input is never modified; on error nothing is produced.
    pub fn step(&self, state: &LatticeState, t: f64) -> SimResult<(LatticeState, f64)> {
        let h = self.h;
        let f = &self.dynamics;

        let k1 = f.derivative(state);
        let k2 = f.derivative(&state.offset(&k1, h / 2.0)?);
        let k3 = f.derivative(&state.offset(&k2, h / 2.0)?);
        let k4 = f.derivative(&state.offset(&k3, h)?);

        let mut next = state
            .offset(&k1, h / 6.0)?
            .offset(&k2, 2.0 * h / 6.0)?
            .offset(&k3, 2.0 * h / 6.0)?
            .offset(&k4, h / 6.0)?;

        // Supports carry zero rate in every stage, but an arbitrary initial
        // state may still hold values there
        next.clamp_boundaries();

        Ok((next, t + h))
    }
}
