pub mod chart;
pub mod energy;
pub mod error;
pub mod palette;
pub mod rate_config;
pub mod refresh;
pub mod state;
pub mod summary;
pub mod telemetry;
pub mod ticks;
