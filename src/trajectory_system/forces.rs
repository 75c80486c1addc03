use crate::control::{environment::Environment, propulsion::PropulsionSystem};

use super::aerodynamics::Aerodynamics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceSample {
    pub mass: f64,
    pub net_force: f64,
    pub powered: bool,
}

pub trait ForceModel {
    fn evaluate(&self, step: usize, velocity: f64, altitude: f64) -> ForceSample;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightModel {
    pub propulsion: PropulsionSystem,
    pub environment: Environment,
    pub aerodynamics: Option<Aerodynamics>,
}

impl FlightModel {
    pub fn new(
        propulsion: PropulsionSystem,
        environment: Environment,
        aerodynamics: Option<Aerodynamics>,
    ) -> Self {
        FlightModel {
            propulsion,
            environment,
            aerodynamics,
        }
    }

    fn drag(&self, velocity: f64, altitude: f64) -> f64 {
        self.aerodynamics.as_ref().map_or(0.0, |aero| {
            aero.calculate_drag(velocity, self.environment.air_density(altitude))
        })
    }
}

impl ForceModel for FlightModel {
    fn evaluate(&self, step: usize, velocity: f64, altitude: f64) -> ForceSample {
        let mass = self.propulsion.mass_at(step);
        let weight = self.environment.weight(mass);
        let drag = self.drag(velocity, altitude);
        let powered = self.propulsion.is_burning(step);

        let net_force = if powered {
            self.propulsion.thrust_at(step) - weight + drag
                - self.propulsion.momentum_loss(step, velocity)
        } else {
            -weight + drag
        };

        ForceSample {
            mass,
            net_force,
            powered,
        }
    }
}
