use crate::error::{SimError, SimResult};
use crate::simulation::lattice::check_dimensions;

/// Lattice dimensions (15 rows of 5 plates, rows 0 and 14 are the clamped supports)
pub const DEFAULT_ROWS: usize = 15;
pub const DEFAULT_COLS: usize = 5;

// ============================================
// Spring Lattice Physics
// ============================================

/// Spring stiffness k
pub const SPRING_STIFFNESS: f64 = 40.0;

/// Plate separation along the row direction
pub const PLATE_SPACING_X: f64 = 25.0;

/// Plate separation along the column direction
pub const PLATE_SPACING_Y: f64 = 25.0;

/// Natural (unstretched) spring length L0
pub const REST_LENGTH: f64 = 0.7;

/// Velocity-proportional air friction coefficient
pub const AIR_FRICTION: f64 = 80.0;

/// Point mass carried by each plate
pub const PLATE_MASS: f64 = 5.0;

/// Gravitational acceleration
pub const GRAVITY: f64 = 9.8;

// ============================================
// Integration
// ============================================

/// Fixed RK4 step size h
pub const DEFAULT_STEP_SIZE: f64 = 0.05;

/// Simulated time at which the driver stops
pub const DEFAULT_T_MAX: f64 = 1000.0;

/// Wall-clock delay between steps in the driver (milliseconds).
/// Only the binary sleeps on this; the kernel never sees it.
pub const DEFAULT_PACING_MS: u64 = 50;

/// Precision selector for the per-step diagnostic dump (2 = hundredths)
pub const DEFAULT_PRINT_PRECISION: usize = 2;

// ============================================
// Plate Rendering
// ============================================

/// Footprint of one rendered plate prism
pub const PLATE_WIDTH: f32 = 1.0;
pub const PLATE_DEPTH: f32 = 1.0;

/// Thickness of one rendered plate prism
pub const PLATE_THICKNESS: f32 = 0.2;

/// Physical constants of the spring lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BridgeParams {
    pub stiffness: f64,
    pub dx: f64,
    pub dy: f64,
    pub rest_length: f64,
    pub air_friction: f64,
    pub plate_mass: f64,
    pub gravity: f64,
}

impl Default for BridgeParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            dx: PLATE_SPACING_X,
            dy: PLATE_SPACING_Y,
            rest_length: REST_LENGTH,
            air_friction: AIR_FRICTION,
            plate_mass: PLATE_MASS,
            gravity: GRAVITY,
        }
    }
}

impl BridgeParams {
    /// Reject parameters that would make the force law meaningless.
    /// Mass must be strictly positive since acceleration divides by it.
    pub fn validate(&self) -> SimResult<()> {
        let fields = [
            ("stiffness", self.stiffness),
            ("dx", self.dx),
            ("dy", self.dy),
            ("rest_length", self.rest_length),
            ("air_friction", self.air_friction),
            ("plate_mass", self.plate_mass),
            ("gravity", self.gravity),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.plate_mass <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "plate_mass must be positive, got {}",
                self.plate_mass
            )));
        }
        if self.stiffness < 0.0 || self.air_friction < 0.0 || self.rest_length < 0.0 {
            return Err(SimError::InvalidConfig(
                "stiffness, air_friction and rest_length must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything needed to start a simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub rows: usize,
    pub cols: usize,
    pub step_size: f64,
    pub t_max: f64,
    pub pacing_ms: u64,
    pub print_precision: usize,
    pub params: BridgeParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            step_size: DEFAULT_STEP_SIZE,
            t_max: DEFAULT_T_MAX,
            pacing_ms: DEFAULT_PACING_MS,
            print_precision: DEFAULT_PRINT_PRECISION,
            params: BridgeParams::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        check_dimensions(self.rows, self.cols)?;
        validate_step_size(self.step_size)?;
        if !self.t_max.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "t_max must be finite, got {}",
                self.t_max
            )));
        }
        self.params.validate()
    }
}

pub(crate) fn validate_step_size(h: f64) -> SimResult<()> {
    if h.is_finite() && h > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "step size must be finite and positive, got {}",
            h
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows, 15);
        assert_eq!(config.cols, 5);
        assert_eq!(config.step_size, 0.05);
    }

    #[test]
    fn test_too_few_rows_rejected() {
        let config = SimConfig {
            rows: 2,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_bad_step_size_rejected() {
        for h in [0.0, -0.05, f64::NAN, f64::INFINITY] {
            let config = SimConfig {
                step_size: h,
                ..SimConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(SimError::InvalidConfig(_))),
                "step size {} should be rejected",
                h
            );
        }
    }

    #[test]
    fn test_massless_plate_rejected() {
        let params = BridgeParams {
            plate_mass: 0.0,
            ..BridgeParams::default()
        };
        assert!(params.validate().is_err());
    }
}
