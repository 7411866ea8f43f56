use crate::utils::error::Result;

/// Acquisition seam: one read-only SNMP query against the target device,
/// returning the raw textual response.
pub trait Poller {
    fn poll(&self, oid: &str) -> Result<String>;
}
