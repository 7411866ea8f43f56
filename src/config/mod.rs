use clap::Parser;
use serde::Serialize;

#[derive(Debug, Clone, Parser)]
#[command(name = "check_asa_sessions")]
#[command(version)]
#[command(
    about = "Icinga (Nagios) plugin that checks the total amount of current, concurrent \
             sessions on a Cisco ASA and evaluates them against 'warning' and 'critical' \
             value thresholds."
)]
pub struct CliArgs {
    /// The SNMP community string of the remote device
    #[arg(value_name = "SNMP_COMMUNITY")]
    pub snmp_community: String,

    /// The IP of the remote host you want to check
    #[arg(value_name = "HOST")]
    pub host: String,

    /// Set high warning threshold
    #[arg(short = 'w', long = "warning")]
    pub warning: Option<i64>,

    /// Set high critical threshold
    #[arg(short = 'c', long = "critical")]
    pub critical: Option<i64>,

    /// Set low warning threshold
    #[arg(long = "wl")]
    pub warning_low: Option<i64>,

    /// Set low critical threshold
    #[arg(long = "cl")]
    pub critical_low: Option<i64>,

    /// Debug output
    #[arg(long)]
    pub debug: bool,
}

/// Threshold bounds assembled once from defaults plus operator overrides,
/// read-only afterwards. Out-of-order combinations are accepted as-is; the
/// classifier applies them in band order without validation.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdConfig {
    pub warning_low: i64,
    pub warning_high: i64,
    pub critical_low: i64,
    pub critical_high: i64,
    /// True iff the operator passed `-c`; disables model-default resolution.
    pub high_threshold_explicit: bool,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            // Low bands sit below zero so they never fire on their own;
            // session counts are non-negative.
            warning_low: -1,
            critical_low: -2,
            warning_high: 50_000,
            critical_high: 100_000,
            high_threshold_explicit: false,
        }
    }
}

impl ThresholdConfig {
    pub fn from_args(args: &CliArgs) -> Self {
        let mut config = Self::default();

        if let Some(wl) = args.warning_low {
            config.warning_low = wl;
        }
        if let Some(cl) = args.critical_low {
            config.critical_low = cl;
        }
        if let Some(warning) = args.warning {
            config.warning_high = warning;
        }
        if let Some(critical) = args.critical {
            config.critical_high = critical;
            config.high_threshold_explicit = true;
        }

        config
    }
}
