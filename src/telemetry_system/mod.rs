pub mod plotting;
pub mod telemetry;
