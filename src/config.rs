use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;
use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::FlightPlan;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VehicleParameters {
    pub thrust: f64,           // N
    pub initial_mass: f64,     // kg
    pub fuel_mass: f64,        // kg
    pub ceiling: f64,          // m
    pub max_velocity: f64,     // m/s
    pub specific_impulse: f64, // s
}

impl Default for VehicleParameters {
    fn default() -> Self {
        VehicleParameters {
            thrust: INTERCEPTOR_THRUST,
            initial_mass: INTERCEPTOR_INITIAL_MASS,
            fuel_mass: INTERCEPTOR_FUEL_MASS,
            ceiling: INTERCEPTOR_CEILING,
            max_velocity: INTERCEPTOR_MAX_VELOCITY,
            specific_impulse: SPECIFIC_IMPULSE,
        }
    }
}

impl VehicleParameters {
    pub fn burn_steps(&self) -> usize {
        (self.ceiling / self.max_velocity).round() as usize
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AerodynamicParameters {
    pub drag_coefficient: f64,
    pub reference_area: f64, // m²
}

impl Default for AerodynamicParameters {
    fn default() -> Self {
        AerodynamicParameters {
            drag_coefficient: DRAG_COEFFICIENT,
            reference_area: CROSS_SECTIONAL_AREA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AtmosphereParameters {
    pub gravity: f64,            // m/s²
    pub sea_level_density: f64,  // kg/m³
    pub scale_height: f64,       // m
}

impl Default for AtmosphereParameters {
    fn default() -> Self {
        AtmosphereParameters {
            gravity: GRAVITY,
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            scale_height: SCALE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterceptParameters {
    pub altitude: f64,      // m
    pub range: f64,         // m
    pub closing_speed: f64, // m/s
}

impl Default for InterceptParameters {
    fn default() -> Self {
        InterceptParameters {
            altitude: INTERCEPT_ALTITUDE,
            range: INTERCEPT_RANGE,
            closing_speed: TARGET_CLOSING_SPEED,
        }
    }
}

impl InterceptParameters {
    pub fn time(&self) -> f64 {
        self.range / self.closing_speed
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunParameters {
    pub flight_plan: FlightPlan,
    pub step_budget: usize,
}

impl Default for RunParameters {
    fn default() -> Self {
        RunParameters {
            flight_plan: FlightPlan::FullFlight,
            step_budget: SIMULATION_STEPS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputParameters {
    pub directory: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for OutputParameters {
    fn default() -> Self {
        OutputParameters {
            directory: PathBuf::from("."),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub vehicle: VehicleParameters,
    pub aerodynamics: AerodynamicParameters,
    pub atmosphere: AtmosphereParameters,
    pub intercept: InterceptParameters,
    pub run: RunParameters,
    pub output: OutputParameters,
}

impl SimulationConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = serde_yaml::from_str(source)?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let file = File::open(path)?;
        let config: SimulationConfig = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let vehicle = &self.vehicle;
        if !(vehicle.initial_mass > 0.0) {
            return Err(invalid("initial mass must be positive"));
        }
        if !(vehicle.fuel_mass > 0.0 && vehicle.fuel_mass < vehicle.initial_mass) {
            return Err(invalid("fuel mass must be positive and below the initial mass"));
        }
        if !(vehicle.max_velocity > 0.0) {
            return Err(invalid("max velocity must be positive"));
        }
        if vehicle.burn_steps() == 0 {
            return Err(invalid("ceiling / max velocity rounds to a zero-step burn"));
        }
        if !(self.atmosphere.scale_height > 0.0) {
            return Err(invalid("scale height must be positive"));
        }
        if self.aerodynamics.drag_coefficient < 0.0 || self.aerodynamics.reference_area < 0.0 {
            return Err(invalid("drag coefficient and reference area cannot be negative"));
        }
        if !(self.intercept.closing_speed > 0.0) {
            return Err(invalid("closing speed must be positive"));
        }
        if self.run.step_budget == 0 {
            return Err(invalid("step budget must be at least one step"));
        }
        if self.output.width == 0 || self.output.height == 0 {
            return Err(invalid("chart size must be non-zero"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> SimulationError {
    SimulationError::ParameterError(message.to_string())
}
