pub mod cli;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod telemetry;
pub mod worker;
