//! Startup configuration checks and server glue for the Sobek Play platform.

pub mod config;
pub mod http;
pub mod telemetry;
