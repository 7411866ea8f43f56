use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(
        "snmpwalk poll failed: {detail}\n\
         Is the host {host} reachable?\n\
         Is it configured to accept SNMP polls from this host?\n\
         Is SNMP community string '{community}' valid?"
    )]
    Poll {
        host: String,
        community: String,
        detail: String,
    },

    #[error("could not parse snmpwalk output: {detail}. Probably wrong SNMP OID for this device.")]
    Parse { detail: String },
}

pub type Result<T> = std::result::Result<T, CheckError>;
