pub mod config;
pub mod pipeline;
pub mod types;

pub use config::SweepConfig;
pub use pipeline::{linspace, sweep_all, sweep_greek};
pub use types::{CurvePoint, Greek, GreekCurve};
