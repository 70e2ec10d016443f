pub mod angle;
pub mod config;
pub mod error;

pub use config::{DiagramConfig, PhasePolicy, SummaryFormat, TrackerConfig};
pub use error::{Result, TrackerError};
