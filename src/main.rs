use gbi_simulation::*;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading configuration");
            let config = SimulationConfig::from_yaml_file(&path)?;
            if let Err(e) = config.validate() {
                error!("Rejected configuration {}: {}", path, e);
                return Err(e.into());
            }
            config
        }
        None => SimulationConfig::default(),
    };

    info!(
        plan = ?config.run.flight_plan,
        burn_steps = config.vehicle.burn_steps(),
        step_budget = config.run.step_budget,
        "starting simulation"
    );

    let runs = run_flight_plan(&config);

    let mut telemetry = Telemetry::new(&config);
    telemetry.collect_data(&runs, config.intercept.altitude);
    telemetry.display_data();

    let written = write_charts(&runs, &config)?;
    info!(charts = written.len(), "done");

    Ok(())
}
