use serde::Deserialize;
use tracing::debug;

use crate::constants::TIME_STEP;

use super::forces::{ForceModel, ForceSample};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPlan {
    FullFlight,
    PoweredAscent,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicState {
    pub altitude: f64,
    pub velocity: f64,
}

/// Velocity change over one step. Zero when the mass is non-positive.
pub fn delta_v(net_force: f64, mass: f64, delta_time: f64) -> f64 {
    if mass <= 0.0 {
        return 0.0;
    }
    (net_force / mass) * delta_time
}

impl KinematicState {
    pub fn advance(&self, sample: &ForceSample, delta_time: f64) -> (KinematicState, f64) {
        let dv = delta_v(sample.net_force, sample.mass, delta_time);
        let velocity = self.velocity + dv;
        let altitude = self.altitude + velocity * delta_time;

        (KinematicState { altitude, velocity }, dv / delta_time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The step at this index would have taken the vehicle below ground and was discarded.
    GroundImpact { step: usize },
    Burnout { step: usize },
    StepBudgetExhausted,
}

/// Parallel time/altitude/velocity/acceleration series of one run.
///
/// All four series always have the same length. Index 0 is the vehicle at rest
/// on the pad; index k is the state after step k - 1, and `acceleration[k]` is
/// the acceleration applied over that step.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub altitude: Vec<f64>,
    pub velocity: Vec<f64>,
    pub acceleration: Vec<f64>,
    pub burnout_step: Option<usize>,
    pub termination: Termination,
}

impl Trajectory {
    fn at_rest() -> Self {
        Trajectory {
            time: vec![0.0],
            altitude: vec![0.0],
            velocity: vec![0.0],
            acceleration: vec![0.0],
            burnout_step: None,
            termination: Termination::StepBudgetExhausted,
        }
    }

    fn push(&mut self, time: f64, state: KinematicState, acceleration: f64) {
        self.time.push(time);
        self.altitude.push(state.altitude);
        self.velocity.push(state.velocity);
        self.acceleration.push(acceleration);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn state_at(&self, index: usize) -> Option<KinematicState> {
        Some(KinematicState {
            altitude: *self.altitude.get(index)?,
            velocity: *self.velocity.get(index)?,
        })
    }

    pub fn final_state(&self) -> KinematicState {
        self.state_at(self.len() - 1).unwrap_or_default()
    }

    /// Time and altitude of the highest sample (the first one on ties).
    pub fn apogee(&self) -> (f64, f64) {
        self.time
            .iter()
            .zip(&self.altitude)
            .fold((0.0, f64::NEG_INFINITY), |best, (&t, &h)| {
                if h > best.1 {
                    (t, h)
                } else {
                    best
                }
            })
    }

    pub fn burnout_point(&self) -> Option<(f64, f64)> {
        let step = self.burnout_step?;
        Some((*self.time.get(step)?, *self.altitude.get(step)?))
    }

    pub fn max_velocity(&self) -> f64 {
        self.velocity.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn max_acceleration_magnitude(&self) -> f64 {
        self.acceleration
            .iter()
            .map(|a| a.abs())
            .fold(0.0, f64::max)
    }

    pub fn time_to_altitude(&self, altitude: f64) -> Option<f64> {
        self.altitude
            .iter()
            .position(|&h| h >= altitude)
            .map(|index| self.time[index])
    }

    pub fn duration(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }
}

/// Step `model` forward from rest on the pad at a fixed one-second step.
///
/// Stops at the first step whose new altitude would be negative (that step is
/// not recorded), at burnout for [`FlightPlan::PoweredAscent`], or after
/// `step_budget` steps.
pub fn integrate<M: ForceModel + ?Sized>(
    model: &M,
    plan: FlightPlan,
    step_budget: usize,
) -> Trajectory {
    let mut trajectory = Trajectory::at_rest();
    let mut state = KinematicState::default();

    for step in 0..step_budget {
        let sample = model.evaluate(step, state.velocity, state.altitude);

        if !sample.powered && trajectory.burnout_step.is_none() {
            debug!(
                step,
                altitude = state.altitude,
                velocity = state.velocity,
                "burnout"
            );
            trajectory.burnout_step = Some(step);
            if plan == FlightPlan::PoweredAscent {
                trajectory.termination = Termination::Burnout { step };
                return trajectory;
            }
        }

        let (next, acceleration) = state.advance(&sample, TIME_STEP);
        if next.altitude < 0.0 {
            debug!(step, velocity = next.velocity, "ground impact");
            trajectory.termination = Termination::GroundImpact { step };
            return trajectory;
        }

        state = next;
        trajectory.push((step + 1) as f64 * TIME_STEP, state, acceleration);
    }

    trajectory
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct ConstantForce {
        mass: f64,
        thrust: f64,
        gravity: f64,
        burn_steps: usize,
    }

    impl ForceModel for ConstantForce {
        fn evaluate(&self, step: usize, _velocity: f64, _altitude: f64) -> ForceSample {
            let powered = step < self.burn_steps;
            let thrust = if powered { self.thrust } else { 0.0 };
            ForceSample {
                mass: self.mass,
                net_force: thrust - self.mass * self.gravity,
                powered,
            }
        }
    }

    #[test]
    fn test_delta_v() {
        assert_relative_eq!(delta_v(24_605.0, 900.0, 1.0), 27.338888888888889);
        assert_relative_eq!(delta_v(100.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_delta_v_guards_non_positive_mass() {
        assert_eq!(delta_v(1_000.0, 0.0, 1.0), 0.0);
        assert_eq!(delta_v(1_000.0, -5.0, 1.0), 0.0);
    }

    #[test]
    fn test_delta_v_propagates_nan() {
        assert!(delta_v(f64::NAN, 900.0, 1.0).is_nan());
        assert!(delta_v(1_000.0, f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_euler_step_uses_updated_velocity_for_altitude() {
        let state = KinematicState {
            altitude: 100.0,
            velocity: 10.0,
        };
        let sample = ForceSample {
            mass: 2.0,
            net_force: 4.0,
            powered: true,
        };

        let (next, acceleration) = state.advance(&sample, 1.0);

        assert_relative_eq!(acceleration, 2.0);
        assert_relative_eq!(next.velocity, 12.0);
        assert_relative_eq!(next.altitude, 112.0);
    }

    #[test]
    fn test_altitude_conventions_agree() {
        // One source formula is `altitude += new_velocity * dt`, the other
        // `altitude += (old_velocity + delta_v) * dt`. They are the same quantity.
        let state = KinematicState {
            altitude: 1_234.5,
            velocity: 321.7,
        };
        let sample = ForceSample {
            mass: 617.3,
            net_force: 20_000.0,
            powered: true,
        };
        let dt = 1.0;

        let (next, _) = state.advance(&sample, dt);
        let dv = delta_v(sample.net_force, sample.mass, dt);
        let old_velocity_form = state.altitude + (state.velocity + dv) * dt;

        assert_eq!(next.altitude, old_velocity_form);
    }

    #[test]
    fn test_integrate_runs_out_of_budget() {
        let model = ConstantForce {
            mass: 10.0,
            thrust: 200.0,
            gravity: 9.81,
            burn_steps: usize::MAX,
        };

        let trajectory = integrate(&model, FlightPlan::FullFlight, 20);

        assert_eq!(trajectory.termination, Termination::StepBudgetExhausted);
        assert_eq!(trajectory.len(), 21);
        assert_eq!(trajectory.burnout_step, None);
        assert_eq!(trajectory.time.last(), Some(&20.0));
    }

    #[test]
    fn test_integrate_stops_before_going_underground() {
        let model = ConstantForce {
            mass: 10.0,
            thrust: 200.0,
            gravity: 9.81,
            burn_steps: 5,
        };

        let trajectory = integrate(&model, FlightPlan::FullFlight, 500);

        let step = match trajectory.termination {
            Termination::GroundImpact { step } => step,
            other => panic!("expected ground impact, got {:?}", other),
        };
        assert_eq!(trajectory.len(), step + 1);
        assert_eq!(trajectory.burnout_step, Some(5));
        assert!(trajectory.altitude.iter().all(|&h| h >= 0.0));
    }

    #[test]
    fn test_integrate_without_lift_off_keeps_only_the_pad_sample() {
        let model = ConstantForce {
            mass: 10.0,
            thrust: 50.0,
            gravity: 9.81,
            burn_steps: 10,
        };

        let trajectory = integrate(&model, FlightPlan::FullFlight, 500);

        assert_eq!(trajectory.termination, Termination::GroundImpact { step: 0 });
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.final_state(), KinematicState::default());
    }

    #[test]
    fn test_powered_ascent_stops_at_burnout() {
        let model = ConstantForce {
            mass: 10.0,
            thrust: 200.0,
            gravity: 9.81,
            burn_steps: 8,
        };

        let trajectory = integrate(&model, FlightPlan::PoweredAscent, 500);

        assert_eq!(trajectory.termination, Termination::Burnout { step: 8 });
        assert_eq!(trajectory.burnout_step, Some(8));
        assert_eq!(trajectory.len(), 9);
    }

    #[test]
    fn test_series_share_one_length() {
        let model = ConstantForce {
            mass: 10.0,
            thrust: 200.0,
            gravity: 9.81,
            burn_steps: 12,
        };

        let trajectory = integrate(&model, FlightPlan::FullFlight, 500);

        assert_eq!(trajectory.altitude.len(), trajectory.len());
        assert_eq!(trajectory.velocity.len(), trajectory.len());
        assert_eq!(trajectory.acceleration.len(), trajectory.len());
        assert_eq!(trajectory.acceleration[0], 0.0);
    }

    #[test]
    fn test_apogee_and_burnout_point() {
        let model = ConstantForce {
            mass: 1.0,
            thrust: 3.0,
            gravity: 1.0,
            burn_steps: 3,
        };

        // Altitudes 2, 6, 12 under power, then 17, 21, 24, 26, 27, 27, 26, ...
        let trajectory = integrate(&model, FlightPlan::FullFlight, 500);
        let (apogee_time, apogee_altitude) = trajectory.apogee();

        assert_eq!(apogee_time, 8.0);
        assert_eq!(apogee_altitude, 27.0);
        assert_eq!(trajectory.max_velocity(), 6.0);
        assert_eq!(trajectory.max_acceleration_magnitude(), 2.0);
        assert_eq!(trajectory.burnout_point(), Some((3.0, 12.0)));
    }

    #[test]
    fn test_time_to_altitude() {
        let model = ConstantForce {
            mass: 1.0,
            thrust: 3.0,
            gravity: 1.0,
            burn_steps: 3,
        };

        let trajectory = integrate(&model, FlightPlan::FullFlight, 500);

        assert_eq!(trajectory.time_to_altitude(10.0), Some(3.0));
        assert_eq!(trajectory.time_to_altitude(1.0e6), None);
        assert_eq!(trajectory.duration(), (trajectory.len() - 1) as f64);
    }
}
