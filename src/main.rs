use clap::Parser;

use check_asa_sessions::utils::logger;
use check_asa_sessions::{
    CheckEngine, CliArgs, ModelDefaults, Severity, SnmpWalkPoller, ThresholdConfig,
};

fn main() {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.debug);

    let config = ThresholdConfig::from_args(&args);
    tracing::debug!(?config, host = %args.host, "starting check");

    let poller = SnmpWalkPoller::new(args.host.clone(), args.snmp_community.clone());
    let engine =
        CheckEngine::new(poller, config, ModelDefaults::default()).with_debug(args.debug);

    let exit_code = match engine.run() {
        Ok(verdict) => {
            println!("{verdict}");
            verdict.severity.exit_code()
        }
        Err(e) => {
            println!("{}: {e}", Severity::Unknown);
            Severity::Unknown.exit_code()
        }
    };

    std::process::exit(exit_code);
}
