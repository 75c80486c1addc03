use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Parameter error: {0}")]
    ParameterError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Plot error: {0}")]
    PlotError(String),
}
