use tracing::warn;

use crate::config::SimulationConfig;
use crate::control::propulsion::{MassModel, PropulsionSystem};
use crate::control::scenario::{Scenario, ScenarioRun};
use crate::trajectory_system::kinematics::Termination;

#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub scenario: Scenario,
    pub apogee_time: f64,
    pub apogee_altitude: f64,
    pub max_velocity: f64,
    pub max_acceleration: f64,
    pub burnout_step: Option<usize>,
    pub burnout_altitude: Option<f64>,
    pub burnout_velocity: Option<f64>,
    pub intercept_altitude_time: Option<f64>,
    pub flight_duration: f64,
    pub samples: usize,
    pub termination: Termination,
}

impl FlightSummary {
    pub fn from_run(run: &ScenarioRun, intercept_altitude: f64) -> Self {
        let trajectory = &run.trajectory;
        let (apogee_time, apogee_altitude) = trajectory.apogee();
        let burnout_state = trajectory
            .burnout_step
            .and_then(|step| trajectory.state_at(step));

        FlightSummary {
            scenario: run.scenario,
            apogee_time,
            apogee_altitude,
            max_velocity: trajectory.max_velocity(),
            max_acceleration: trajectory.max_acceleration_magnitude(),
            burnout_step: trajectory.burnout_step,
            burnout_altitude: burnout_state.map(|state| state.altitude),
            burnout_velocity: burnout_state.map(|state| state.velocity),
            intercept_altitude_time: trajectory.time_to_altitude(intercept_altitude),
            flight_duration: trajectory.duration(),
            samples: trajectory.len(),
            termination: trajectory.termination,
        }
    }
}

pub struct Telemetry {
    pub summaries: Vec<FlightSummary>,
    ideal_delta_v: f64,
    intercept_time: f64,
}

impl Telemetry {
    pub fn new(config: &SimulationConfig) -> Self {
        let propulsion = PropulsionSystem::new(&config.vehicle, MassModel::Varying);
        Telemetry {
            summaries: Vec::new(),
            ideal_delta_v: propulsion
                .ideal_delta_v(config.vehicle.specific_impulse, config.atmosphere.gravity),
            intercept_time: config.intercept.time(),
        }
    }

    pub fn collect_data(&mut self, runs: &[ScenarioRun], intercept_altitude: f64) {
        for run in runs {
            let summary = FlightSummary::from_run(run, intercept_altitude);
            if summary.termination == Termination::StepBudgetExhausted {
                warn!(
                    scenario = run.scenario.label(),
                    samples = summary.samples,
                    "step budget ran out before the flight ended"
                );
            }
            self.summaries.push(summary);
        }
    }

    pub fn ideal_delta_v(&self) -> f64 {
        self.ideal_delta_v
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    fn format_termination(termination: &Termination) -> String {
        match termination {
            Termination::GroundImpact { step } => format!("ground impact during step {}", step),
            Termination::Burnout { step } => format!("stopped at burnout, step {}", step),
            Termination::StepBudgetExhausted => "step budget exhausted".to_string(),
        }
    }

    pub fn report(&self) -> String {
        let mut report = String::from("--- Flight Summary ---\n");
        report.push_str(&format!(
            "Ideal rocket-equation Δv: {:.2} m/s\n",
            self.ideal_delta_v
        ));
        report.push_str(&format!(
            "Interception time: {}\n",
            Self::format_time(self.intercept_time)
        ));

        for summary in &self.summaries {
            report.push_str(&format!("\n[{}]\n", summary.scenario.label()));
            report.push_str(&format!(
                "Apogee: {} at {}\n",
                Self::format_altitude(summary.apogee_altitude),
                Self::format_time(summary.apogee_time)
            ));
            report.push_str(&format!("Max Velocity: {:.2} m/s\n", summary.max_velocity));
            report.push_str(&format!(
                "Max Acceleration: {:.2} m/s²\n",
                summary.max_acceleration
            ));
            match (
                summary.burnout_step,
                summary.burnout_altitude,
                summary.burnout_velocity,
            ) {
                (Some(step), Some(altitude), Some(velocity)) => report.push_str(&format!(
                    "Burnout: step {} at {} ({:.2} m/s)\n",
                    step,
                    Self::format_altitude(altitude),
                    velocity
                )),
                _ => report.push_str("Burnout: not reached\n"),
            }
            match summary.intercept_altitude_time {
                Some(time) => report.push_str(&format!(
                    "Intercept altitude reached at: {}\n",
                    Self::format_time(time)
                )),
                None => report.push_str("Intercept altitude not reached\n"),
            }
            report.push_str(&format!(
                "Flight ended after {} ({})\n",
                Self::format_time(summary.flight_duration),
                Self::format_termination(&summary.termination)
            ));
        }

        report
    }

    pub fn display_data(&self) {
        println!("{}", self.report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::scenario::run_scenario;
    use crate::trajectory_system::kinematics::FlightPlan;
    use approx::assert_relative_eq;

    fn nominal_summary(scenario: Scenario) -> FlightSummary {
        let config = SimulationConfig::default();
        let run = run_scenario(&config, scenario, FlightPlan::FullFlight);
        FlightSummary::from_run(&run, config.intercept.altitude)
    }

    #[test]
    fn test_summary_of_varying_mass_flight() {
        let summary = nominal_summary(Scenario::VaryingMass);

        assert_eq!(summary.burnout_step, Some(54));
        assert_eq!(summary.samples, 461);
        assert_eq!(summary.termination, Termination::GroundImpact { step: 460 });
        assert_relative_eq!(summary.apogee_time, 245.0);
        assert_relative_eq!(summary.apogee_altitude, 226_355.4516355095, max_relative = 1e-9);
        assert_relative_eq!(summary.max_velocity, 1_881.7104703008386, max_relative = 1e-9);
        assert_relative_eq!(
            summary.burnout_velocity.unwrap(),
            summary.max_velocity,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_intercept_altitude_is_reached_during_burn() {
        let summary = nominal_summary(Scenario::ConstantMassWithDrag);
        let time = summary.intercept_altitude_time.unwrap();
        assert!(time < 54.0);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(Telemetry::format_time(21.18), "21.18s");
        assert_eq!(Telemetry::format_time(245.0), "4m 5.00s");
        assert_eq!(Telemetry::format_time(119.6), "1m 59.60s");
        assert_eq!(Telemetry::format_altitude(950.0), "950.00 m");
        assert_eq!(Telemetry::format_altitude(46_824.9), "46.82 km");
    }

    #[test]
    fn test_report_lists_every_scenario() {
        let config = SimulationConfig::default();
        let runs: Vec<ScenarioRun> = Scenario::ALL
            .iter()
            .map(|&scenario| run_scenario(&config, scenario, FlightPlan::FullFlight))
            .collect();

        let mut telemetry = Telemetry::new(&config);
        telemetry.collect_data(&runs, config.intercept.altitude);
        let report = telemetry.report();

        assert_eq!(telemetry.summaries.len(), 4);
        for scenario in Scenario::ALL {
            assert!(report.contains(scenario.label()));
        }
        assert!(report.contains("ground impact"));
    }

    #[test]
    fn test_ideal_delta_v_exceeds_simulated_burnout_velocity() {
        let config = SimulationConfig::default();
        let telemetry = Telemetry::new(&config);
        let summary = nominal_summary(Scenario::VaryingMass);
        assert!(telemetry.ideal_delta_v() > summary.burnout_velocity.unwrap());
    }
}
