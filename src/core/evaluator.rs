use serde::Serialize;

use crate::config::ThresholdConfig;
use crate::domain::model::{ModelDefaults, Severity};

/// `critical_high` for this run: the operator's `-c` value if given,
/// otherwise the polled model's default ceiling, otherwise the fallback for
/// unknown models. Can only be computed once the model is known.
pub fn resolve_critical_high(
    config: &ThresholdConfig,
    model: &str,
    defaults: &ModelDefaults,
) -> i64 {
    if config.high_threshold_explicit {
        return config.critical_high;
    }
    defaults
        .ceiling_for(model)
        .unwrap_or_else(|| defaults.fallback())
}

/// Bounds actually used for classification. Derived from the config rather
/// than written back into it, so the config stays untouched after assembly.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveThresholds {
    pub warning_low: i64,
    pub warning_high: i64,
    pub critical_low: i64,
    pub critical_high: i64,
}

impl EffectiveThresholds {
    pub fn resolve(config: &ThresholdConfig, model: &str, defaults: &ModelDefaults) -> Self {
        Self {
            warning_low: config.warning_low,
            warning_high: config.warning_high,
            critical_low: config.critical_low,
            critical_high: resolve_critical_high(config, model, defaults),
        }
    }
}

/// Five bands, first match in this order wins:
///   count <= critical_low                      CRITICAL (low)
///   critical_low < count <= warning_low        WARNING (low)
///   warning_low < count < warning_high         OK
///   warning_high <= count < critical_high      WARNING (high)
///   count >= critical_high                     CRITICAL (high)
/// Overlapping operator-supplied bounds are not validated; the chain below
/// keeps the listed-order tie-break.
pub fn classify(session_count: i64, thresholds: &EffectiveThresholds) -> Severity {
    if session_count <= thresholds.critical_low {
        Severity::Critical
    } else if session_count <= thresholds.warning_low {
        Severity::Warning
    } else if session_count < thresholds.warning_high {
        Severity::Ok
    } else if session_count < thresholds.critical_high {
        Severity::Warning
    } else {
        Severity::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordered_thresholds() -> EffectiveThresholds {
        EffectiveThresholds {
            critical_low: 10,
            warning_low: 20,
            warning_high: 50,
            critical_high: 100,
        }
    }

    fn default_config() -> ThresholdConfig {
        ThresholdConfig::default()
    }

    #[test]
    fn classify_hits_each_band_at_its_boundaries() {
        let t = ordered_thresholds();

        // Outer low boundary, exact equality.
        assert_eq!(classify(10, &t), Severity::Critical);
        // Interior boundaries.
        assert_eq!(classify(11, &t), Severity::Warning);
        assert_eq!(classify(20, &t), Severity::Warning);
        assert_eq!(classify(21, &t), Severity::Ok);
        assert_eq!(classify(49, &t), Severity::Ok);
        assert_eq!(classify(50, &t), Severity::Warning);
        assert_eq!(classify(99, &t), Severity::Warning);
        // Outer high boundary, exact equality.
        assert_eq!(classify(100, &t), Severity::Critical);
    }

    #[test]
    fn classify_below_low_critical() {
        let t = ordered_thresholds();
        assert_eq!(classify(0, &t), Severity::Critical);
        assert_eq!(classify(-5, &t), Severity::Critical);
    }

    #[test]
    fn zero_sessions_with_defaults_is_ok() {
        let config = default_config();
        let defaults = ModelDefaults::default();
        let t = EffectiveThresholds::resolve(&config, "ASA5520", &defaults);

        assert_eq!(classify(0, &t), Severity::Ok);
    }

    #[test]
    fn default_warning_high_boundary_is_warning_for_unknown_model() {
        let config = default_config();
        let defaults = ModelDefaults::default();
        let t = EffectiveThresholds::resolve(&config, "no-such-model", &defaults);

        // 50000 <= count < 800000 is the high warning band.
        assert_eq!(classify(50_000, &t), Severity::Warning);
    }

    #[test]
    fn fallback_ceiling_boundary_is_critical_for_unknown_model() {
        let config = default_config();
        let defaults = ModelDefaults::default();
        let t = EffectiveThresholds::resolve(&config, "no-such-model", &defaults);

        assert_eq!(t.critical_high, 800_000);
        assert_eq!(classify(800_000, &t), Severity::Critical);
    }

    #[test]
    fn resolve_uses_model_ceiling_when_not_explicit() {
        let config = default_config();
        let defaults = ModelDefaults::default();

        assert_eq!(resolve_critical_high(&config, "ASA5505", &defaults), 10_000);
        assert_eq!(resolve_critical_high(&config, "ASA5540", &defaults), 400_000);
    }

    #[test]
    fn resolve_falls_back_for_unrecognized_model() {
        let config = default_config();
        let defaults = ModelDefaults::default();

        assert_eq!(resolve_critical_high(&config, "PIX515", &defaults), 800_000);
        assert_eq!(resolve_critical_high(&config, "", &defaults), 800_000);
    }

    #[test]
    fn explicit_override_beats_model_ceiling() {
        let config = ThresholdConfig {
            critical_high: 1000,
            high_threshold_explicit: true,
            ..ThresholdConfig::default()
        };
        let defaults = ModelDefaults::default();

        // Even for a model with a much larger table default.
        assert_eq!(resolve_critical_high(&config, "ASA5550", &defaults), 1000);
        assert_eq!(resolve_critical_high(&config, "unknown", &defaults), 1000);
    }

    #[test]
    fn overlapping_thresholds_keep_listed_order() {
        // warning_low above warning_high: accepted as-is, band 2 shadows
        // what would otherwise be the OK band.
        let t = EffectiveThresholds {
            critical_low: 10,
            warning_low: 60,
            warning_high: 50,
            critical_high: 100,
        };

        assert_eq!(classify(55, &t), Severity::Warning);
        assert_eq!(classify(70, &t), Severity::Warning);
        assert_eq!(classify(100, &t), Severity::Critical);
    }
}
