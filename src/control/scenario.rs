use tracing::info;

use crate::config::SimulationConfig;
use crate::control::environment::Environment;
use crate::control::propulsion::{MassModel, PropulsionSystem};
use crate::trajectory_system::aerodynamics::Aerodynamics;
use crate::trajectory_system::forces::FlightModel;
use crate::trajectory_system::kinematics::{integrate, FlightPlan, Termination, Trajectory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    VaryingMass,
    ConstantMass,
    VaryingMassWithDrag,
    ConstantMassWithDrag,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::VaryingMass,
        Scenario::ConstantMass,
        Scenario::VaryingMassWithDrag,
        Scenario::ConstantMassWithDrag,
    ];

    pub fn mass_model(&self) -> MassModel {
        match self {
            Scenario::VaryingMass | Scenario::VaryingMassWithDrag => MassModel::Varying,
            Scenario::ConstantMass | Scenario::ConstantMassWithDrag => MassModel::Constant,
        }
    }

    pub fn has_drag(&self) -> bool {
        matches!(
            self,
            Scenario::VaryingMassWithDrag | Scenario::ConstantMassWithDrag
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::VaryingMass => "Varying Mass (No Drag)",
            Scenario::ConstantMass => "Constant Mass (No Drag)",
            Scenario::VaryingMassWithDrag => "Varying Mass + Drag",
            Scenario::ConstantMassWithDrag => "Constant Mass + Drag",
        }
    }

    pub fn build_model(&self, config: &SimulationConfig) -> FlightModel {
        FlightModel::new(
            PropulsionSystem::new(&config.vehicle, self.mass_model()),
            Environment::new(&config.atmosphere),
            self.has_drag()
                .then(|| Aerodynamics::from_parameters(&config.aerodynamics)),
        )
    }
}

impl FlightPlan {
    pub fn scenarios(&self) -> &'static [Scenario] {
        match self {
            FlightPlan::FullFlight => &Scenario::ALL,
            FlightPlan::PoweredAscent => &[Scenario::VaryingMass, Scenario::ConstantMass],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRun {
    pub scenario: Scenario,
    pub trajectory: Trajectory,
}

pub fn run_scenario(
    config: &SimulationConfig,
    scenario: Scenario,
    plan: FlightPlan,
) -> ScenarioRun {
    let model = scenario.build_model(config);
    let trajectory = integrate(&model, plan, config.run.step_budget);

    match trajectory.termination {
        Termination::GroundImpact { step } => {
            info!(scenario = scenario.label(), step, "ground impact")
        }
        Termination::Burnout { step } => info!(scenario = scenario.label(), step, "burnout"),
        Termination::StepBudgetExhausted => {
            info!(scenario = scenario.label(), "step budget exhausted")
        }
    }

    ScenarioRun {
        scenario,
        trajectory,
    }
}

pub fn run_scenarios(
    config: &SimulationConfig,
    scenarios: &[Scenario],
    plan: FlightPlan,
) -> Vec<ScenarioRun> {
    scenarios
        .iter()
        .map(|&scenario| run_scenario(config, scenario, plan))
        .collect()
}

pub fn run_flight_plan(config: &SimulationConfig) -> Vec<ScenarioRun> {
    let plan = config.run.flight_plan;
    run_scenarios(config, plan.scenarios(), plan)
}
