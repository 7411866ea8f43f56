pub mod check;
pub mod evaluator;

pub use crate::domain::model::{ModelDefaults, Reading, Severity, Verdict};
pub use crate::domain::ports::Poller;
pub use crate::utils::error::Result;
