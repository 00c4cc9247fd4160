use crate::config::SimConfig;
use crate::error::SimResult;
use crate::render::Renderer;
use crate::simulation::dynamics::{Dynamics, SpringLattice};
use crate::simulation::lattice::LatticeState;
use crate::simulation::stepper::Rk4Stepper;

/// Lifecycle of a run. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimStatus {
    Running,
    Stopped,
}

/// Sole owner of the evolving `(state, t)` pair.
pub struct SimulationHandle<D: Dynamics = SpringLattice> {
    stepper: Rk4Stepper<D>,
    state: LatticeState,
    t: f64,
    t_max: f64,
    step_count: u64,
}

impl SimulationHandle<SpringLattice> {
    /// Lattice at rest with the spring law and step size from `config`
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        let state = LatticeState::new(config.rows, config.cols)?;
        let stepper = Rk4Stepper::new(SpringLattice::new(config.params), config.step_size)?;
        Ok(Self::with_state(stepper, state, config.t_max))
    }
}

impl<D: Dynamics> SimulationHandle<D> {
    /// Start from an explicit initial state at t = 0
    pub fn with_state(stepper: Rk4Stepper<D>, state: LatticeState, t_max: f64) -> Self {
        Self {
            stepper,
            state,
            t: 0.0,
            t_max,
            step_count: 0,
        }
    }

    pub fn status(&self) -> SimStatus {
        if self.t < self.t_max {
            SimStatus::Running
        } else {
            SimStatus::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.status() == SimStatus::Running
    }

    pub fn state(&self) -> &LatticeState {
        &self.state
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Take one RK4 step if still running.
    ///
    /// A stopped handle is left untouched. On error the previous state is kept.
    pub fn advance(&mut self) -> SimResult<SimStatus> {
        if !self.is_running() {
            return Ok(SimStatus::Stopped);
        }

        let (next, t_next) = self.stepper.step(&self.state, self.t)?;
        self.state = next;
        self.t = t_next;
        self.step_count += 1;

        log::trace!(
            "step {} -> t = {:.3}, max |x| = {:.4}",
            self.step_count,
            self.t,
            self.state.matrix().max_abs()
        );

        let status = self.status();
        if status == SimStatus::Stopped {
            log::info!(
                "Simulation stopped at t = {:.3} after {} steps",
                self.t,
                self.step_count
            );
        }
        Ok(status)
    }

    /// Hand the current state to `renderer`. Render failures are logged and
    /// otherwise ignored.
    pub fn present<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        if let Err(e) = renderer.draw(self.state.rows(), self.state.cols(), &self.state) {
            log::warn!("Renderer failed at t = {:.3}: {}", self.t, e);
        }
    }

    /// Step to completion, presenting after every step and yielding to
    /// `between_steps` so the caller can pace or cancel cooperatively.
    /// Returns the number of steps taken by this call.
    pub fn run<R, F>(&mut self, renderer: &mut R, mut between_steps: F) -> SimResult<u64>
    where
        R: Renderer + ?Sized,
        F: FnMut(&Self) -> bool,
    {
        let start = self.step_count;
        while self.is_running() {
            self.advance()?;
            self.present(renderer);
            if !between_steps(self) {
                log::info!("Simulation cancelled at t = {:.3}", self.t);
                break;
            }
        }
        Ok(self.step_count - start)
    }
}
