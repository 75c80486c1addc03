pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use config::SimulationConfig;
pub use constants::*;
pub use control::environment::{Atmosphere, Environment};
pub use control::propulsion::{MassModel, PropulsionSystem};
pub use control::scenario::{run_flight_plan, run_scenario, run_scenarios, Scenario, ScenarioRun};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::forces::{FlightModel, ForceModel, ForceSample};
pub use trajectory_system::kinematics::{
    delta_v, integrate, FlightPlan, KinematicState, Termination, Trajectory,
};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::plotting::write_charts;
pub use telemetry_system::telemetry::{FlightSummary, Telemetry};
