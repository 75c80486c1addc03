pub mod environment;
pub mod propulsion;
pub mod scenario;
