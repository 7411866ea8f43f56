pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::snmp::SnmpWalkPoller;
pub use config::{CliArgs, ThresholdConfig};
pub use core::check::CheckEngine;
pub use domain::model::{ModelDefaults, Reading, Severity, Verdict};
pub use domain::ports::Poller;
pub use utils::error::{CheckError, Result};
