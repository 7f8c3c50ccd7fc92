pub mod config;
pub mod git;
pub mod pipeline;
pub mod sink;
pub mod telemetry;
