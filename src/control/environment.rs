use crate::config::AtmosphereParameters;

/// Isothermal exponential atmosphere: ρ(h) = ρ₀ · exp(−h / H).
#[derive(Debug, Clone, PartialEq)]
pub struct Atmosphere {
    pub sea_level_density: f64,
    pub scale_height: f64,
}

impl Atmosphere {
    pub fn new(sea_level_density: f64, scale_height: f64) -> Self {
        Atmosphere {
            sea_level_density,
            scale_height,
        }
    }

    pub fn air_density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub gravity: f64,
    pub atmosphere: Atmosphere,
}

impl Environment {
    pub fn new(params: &AtmosphereParameters) -> Self {
        Environment {
            gravity: params.gravity,
            atmosphere: Atmosphere::new(params.sea_level_density, params.scale_height),
        }
    }

    pub fn weight(&self, mass: f64) -> f64 {
        mass * self.gravity
    }

    pub fn air_density(&self, altitude: f64) -> f64 {
        self.atmosphere.air_density(altitude)
    }
}
