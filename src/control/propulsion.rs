use serde::Deserialize;

use crate::config::VehicleParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassModel {
    Varying,
    Constant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropulsionSystem {
    pub thrust: f64,
    pub initial_mass: f64,
    pub fuel_mass: f64,
    pub burn_steps: usize,
    pub mass_model: MassModel,
}

impl PropulsionSystem {
    pub fn new(vehicle: &VehicleParameters, mass_model: MassModel) -> Self {
        PropulsionSystem {
            thrust: vehicle.thrust,
            initial_mass: vehicle.initial_mass,
            fuel_mass: vehicle.fuel_mass,
            burn_steps: vehicle.burn_steps(),
            mass_model,
        }
    }

    pub fn burn_rate(&self) -> f64 {
        self.fuel_mass / self.burn_steps as f64
    }

    pub fn dry_mass(&self) -> f64 {
        self.initial_mass - self.fuel_mass
    }

    pub fn is_burning(&self, step: usize) -> bool {
        step < self.burn_steps
    }

    pub fn mass_at(&self, step: usize) -> f64 {
        if !self.is_burning(step) {
            return self.dry_mass();
        }
        match self.mass_model {
            MassModel::Varying => self.initial_mass - self.burn_rate() * step as f64,
            MassModel::Constant => self.initial_mass,
        }
    }

    pub fn thrust_at(&self, step: usize) -> f64 {
        if self.is_burning(step) {
            self.thrust
        } else {
            0.0
        }
    }

    /// Force lost to propellant leaving at vehicle velocity (ṁ · v).
    pub fn momentum_loss(&self, step: usize, velocity: f64) -> f64 {
        match self.mass_model {
            MassModel::Varying if self.is_burning(step) => self.burn_rate() * velocity,
            _ => 0.0,
        }
    }

    /// Tsiolkovsky Δv for the full burn: Isp · g · ln(m₀ / m_dry).
    pub fn ideal_delta_v(&self, specific_impulse: f64, gravity: f64) -> f64 {
        specific_impulse * gravity * (self.initial_mass / self.dry_mass()).ln()
    }
}
