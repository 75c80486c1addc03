use crate::config::AerodynamicParameters;

#[derive(Debug, Clone, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub reference_area: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, reference_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            reference_area,
        }
    }

    pub fn from_parameters(params: &AerodynamicParameters) -> Self {
        Self::new(params.drag_coefficient, params.reference_area)
    }

    pub fn calculate_drag_magnitude(&self, velocity: f64, air_density: f64) -> f64 {
        0.5 * air_density * self.drag_coefficient * self.reference_area * velocity.powi(2)
    }

    pub fn calculate_drag(&self, velocity: f64, air_density: f64) -> f64 {
        let drag_magnitude = self.calculate_drag_magnitude(velocity, air_density);

        if velocity > 0.0 {
            -drag_magnitude
        } else {
            drag_magnitude
        }
    }
}
