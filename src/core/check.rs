use crate::adapters::snmp::{parse_model, parse_session_count, OID_ASA_MODEL, OID_ASA_SESSIONS};
use crate::config::ThresholdConfig;
use crate::core::evaluator::{classify, EffectiveThresholds};
use crate::core::{ModelDefaults, Poller, Reading, Result, Verdict};

/// Single-shot check run: poll session count, poll model, parse, resolve the
/// model-aware ceiling, classify. Any poll or parse failure aborts the run
/// with no verdict; there are no retries.
pub struct CheckEngine<P: Poller> {
    poller: P,
    config: ThresholdConfig,
    defaults: ModelDefaults,
    debug: bool,
}

impl<P: Poller> CheckEngine<P> {
    pub fn new(poller: P, config: ThresholdConfig, defaults: ModelDefaults) -> Self {
        Self {
            poller,
            config,
            defaults,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn run(&self) -> Result<Verdict> {
        // Strictly sequential; the model is needed before thresholds can be
        // resolved.
        let raw_sessions = self.poller.poll(OID_ASA_SESSIONS)?;
        let raw_model = self.poller.poll(OID_ASA_MODEL)?;

        let reading = Reading {
            session_count: parse_session_count(&raw_sessions)?,
            model: parse_model(&raw_model)?,
        };
        tracing::debug!(
            session_count = reading.session_count,
            model = %reading.model,
            "acquisition complete"
        );

        let thresholds = EffectiveThresholds::resolve(&self.config, &reading.model, &self.defaults);

        if self.debug {
            self.dump_debug(&raw_sessions, &raw_model, &reading, &thresholds);
        }

        let severity = classify(reading.session_count, &thresholds);
        Ok(Verdict::evaluated(severity, &reading))
    }

    fn dump_debug(
        &self,
        raw_sessions: &str,
        raw_model: &str,
        reading: &Reading,
        thresholds: &EffectiveThresholds,
    ) {
        println!("\n // DEBUG: settings //\n");
        println!(
            "{}",
            serde_json::to_string_pretty(&self.config).unwrap_or_default()
        );
        println!(
            "{}",
            serde_json::to_string_pretty(&self.defaults).unwrap_or_default()
        );
        println!(
            "{}",
            serde_json::to_string_pretty(thresholds).unwrap_or_default()
        );

        println!("\n // DEBUG: command output //\n");
        println!(" Raw data:\n  {}", raw_sessions.trim_end());
        println!(" Parsed to:\n  {}", reading.session_count);
        println!("\n Raw data:\n  {}", raw_model.trim_end());
        println!(" Parsed to:\n  {}\n", reading.model);
    }
}
