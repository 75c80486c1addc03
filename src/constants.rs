// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Interceptor Constants (based on Lockheed Martin THAAD)
pub const INTERCEPTOR_CEILING: f64 = 150_000.0; // m
pub const INTERCEPTOR_THRUST: f64 = 33_434.0; // N
pub const INTERCEPTOR_INITIAL_MASS: f64 = 900.0; // kg
pub const INTERCEPTOR_FUEL_MASS: f64 = 825.0; // kg
pub const INTERCEPTOR_MAX_VELOCITY: f64 = 2_800.0; // m/s
pub const SPECIFIC_IMPULSE: f64 = 304.0; // seconds

// Aerodynamic Constants
pub const DRAG_COEFFICIENT: f64 = 0.3;
pub const CROSS_SECTIONAL_AREA: f64 = 0.3; // m²

// Environmental Constants
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const SCALE_HEIGHT: f64 = 8_500.0; // m

// Interception Constants
pub const INTERCEPT_ALTITUDE: f64 = 15_000.0; // m
pub const INTERCEPT_RANGE: f64 = 30_000.0; // m
pub const TARGET_CLOSING_SPEED: f64 = 1_416.3334; // m/s

// Simulation Parameters
pub const TIME_STEP: f64 = 1.0; // s
pub const SIMULATION_STEPS: usize = 500;

// Chart Output
pub const CHART_WIDTH: u32 = 1_000; // px
pub const CHART_HEIGHT: u32 = 700; // px

// Chart File Names
pub const POSITION_CHART_FILE: &str = "GBI_position_all.png";
pub const VELOCITY_CHART_FILE: &str = "GBI_velocity_all.png";
pub const ACCELERATION_CHART_FILE: &str = "GBI_acceleration_all.png";
pub const ASCENT_POSITION_CHART_FILE: &str = "GBI_position.png";
pub const ASCENT_VELOCITY_CHART_FILE: &str = "GBI_velocity.png";
