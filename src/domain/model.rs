use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Plugin severity levels in the monitoring supervisor's standard vocabulary.
/// The variant order matches the Nagios exit-code contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two values extracted from acquisition, one per run.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub session_count: i64,
    pub model: String,
}

/// Final result of a check run. Displays as the one-line plugin status,
/// perfdata suffix included.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub severity: Severity,
    pub message: String,
}

impl Verdict {
    pub fn evaluated(severity: Severity, reading: &Reading) -> Self {
        let message = format!(
            "Current sessions: {count} MODEL: {model} | current_sessions={count}",
            count = reading.session_count,
            model = reading.model,
        );
        Self { severity, message }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Per-model default session ceilings, used for `critical_high` when the
/// operator did not pass `-c`. Built once at startup, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDefaults {
    ceilings: HashMap<String, i64>,
    fallback: i64,
}

impl ModelDefaults {
    pub fn ceiling_for(&self, model: &str) -> Option<i64> {
        self.ceilings.get(model).copied()
    }

    pub fn fallback(&self) -> i64 {
        self.fallback
    }
}

impl Default for ModelDefaults {
    fn default() -> Self {
        let ceilings = [
            ("ASA5505", 10_000),
            ("ASA5510", 50_000),
            ("ASA5512", 280_000),
            ("ASA5520", 280_000),
            ("ASA5540", 400_000),
            ("ASA5550", 650_000),
        ]
        .into_iter()
        .map(|(model, ceiling)| (model.to_string(), ceiling))
        .collect();

        Self {
            ceilings,
            fallback: 800_000,
        }
    }
}
