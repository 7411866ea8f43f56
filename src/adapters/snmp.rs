use std::process::Command;

use crate::domain::ports::Poller;
use crate::utils::error::{CheckError, Result};

/// CISCO-FIREWALL-MIB cfwConnectionStatValue: current concurrent sessions.
pub const OID_ASA_SESSIONS: &str = ".1.3.6.1.4.1.9.9.147.1.2.2.2.1.5.40.6";
/// ENTITY-MIB entPhysicalModelName: chassis model identifier.
pub const OID_ASA_MODEL: &str = ".1.3.6.1.2.1.47.1.1.1.1.13.1";

/// Shells out to `snmpwalk` (SNMP v2c) for each poll. The probe does not
/// speak SNMP itself and does not override snmpwalk's own timeout handling.
#[derive(Debug, Clone)]
pub struct SnmpWalkPoller {
    host: String,
    community: String,
}

impl SnmpWalkPoller {
    pub fn new(host: String, community: String) -> Self {
        Self { host, community }
    }

    fn poll_error(&self, detail: String) -> CheckError {
        CheckError::Poll {
            host: self.host.clone(),
            community: self.community.clone(),
            detail,
        }
    }
}

impl Poller for SnmpWalkPoller {
    fn poll(&self, oid: &str) -> Result<String> {
        tracing::debug!(host = %self.host, oid, "running snmpwalk");

        let output = Command::new("snmpwalk")
            .args(["-v", "2c", "-c", &self.community, &self.host, oid])
            .output()
            .map_err(|e| self.poll_error(format!("could not run snmpwalk: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.poll_error(format!(
                "snmpwalk exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| self.poll_error("snmpwalk produced non-UTF-8 output".to_string()))
    }
}

/// A session response looks like
/// `SNMPv2-SMI::enterprises.9.9.147.1.2.2.2.1.5.40.6 = Gauge32: 4023`;
/// the value is the fourth whitespace-separated token.
pub fn parse_session_count(raw: &str) -> Result<i64> {
    let token = raw
        .split_whitespace()
        .nth(3)
        .ok_or_else(|| CheckError::Parse {
            detail: format!("expected at least 4 fields in session response, got '{}'", raw.trim()),
        })?;

    token.parse().map_err(|_| CheckError::Parse {
        detail: format!("session count token '{token}' is not an integer"),
    })
}

/// A model response looks like
/// `SNMPv2-SMI::mib-2.47.1.1.1.1.13.1 = STRING: "ASA5520"`;
/// the model is the quoted part of the fourth token.
pub fn parse_model(raw: &str) -> Result<String> {
    let token = raw
        .split_whitespace()
        .nth(3)
        .ok_or_else(|| CheckError::Parse {
            detail: format!("expected at least 4 fields in model response, got '{}'", raw.trim()),
        })?;

    let model = token.split('"').nth(1).ok_or_else(|| CheckError::Parse {
        detail: format!("model token '{token}' has no quoted value"),
    })?;

    Ok(model.to_string())
}
