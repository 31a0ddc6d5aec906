pub mod alerts;
pub mod config;
pub mod discrepancy;
pub mod fetch;
pub mod log;
pub mod period;
pub mod transform;
pub mod watch;
