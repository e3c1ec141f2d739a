//! Threshold contexts: turn an upstream metric into a plugin result.

use nagiosplugin::{CheckResult, PerfData, ServiceState, Unit};

use crate::report::range::Range;
use crate::upstreams::Metric;

/// Round to two decimals so summaries and perfdata read `33.33`, not
/// `33.333333333333336`.
pub fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Warning and critical ranges attached to one upstream.
#[derive(Debug, Clone)]
pub struct UpstreamContext {
    pub name: String,
    pub warning: Option<Range>,
    pub critical: Option<Range>,
}

impl UpstreamContext {
    pub fn new(name: impl Into<String>, warning: Option<Range>, critical: Option<Range>) -> Self {
        Self {
            name: name.into(),
            warning,
            critical,
        }
    }

    /// Compare the metric against critical first, then warning.
    pub fn evaluate(&self, metric: &Metric) -> UpstreamResult {
        let critical = self.critical.and_then(|r| r.violation(metric.value));
        let warning = self.warning.and_then(|r| r.violation(metric.value));

        let (state, hint) = match (critical, warning) {
            (Some(hint), _) => (ServiceState::Critical, Some(hint)),
            (None, Some(hint)) => (ServiceState::Warning, Some(hint)),
            (None, None) => (ServiceState::Ok, None),
        };

        let value = round_percent(metric.value);
        let perfdata = PerfData::new(metric.name.clone(), value)
            .with_unit(Unit::Percentage)
            .with_thresholds(
                self.warning.and_then(|r| r.perf_threshold()),
                self.critical.and_then(|r| r.perf_threshold()),
            )
            .with_minimum(0.0)
            .with_maximum(100.0);

        UpstreamResult {
            state,
            name: metric.name.clone(),
            text: format!("{} % servers are down in {} upstream", value, metric.name),
            hint,
            perfdata: Some(perfdata),
            details: Vec::new(),
        }
    }
}

/// Evaluated state of one upstream.
#[derive(Debug, Clone)]
pub struct UpstreamResult {
    pub state: ServiceState,
    pub name: String,
    pub text: String,
    pub hint: Option<String>,
    pub perfdata: Option<PerfData<f64>>,
    /// Extra lines shown at high verbosity.
    pub details: Vec<String>,
}

impl UpstreamResult {
    /// An upstream whose percentage could not be computed.
    pub fn unknown(name: impl Into<String>, reason: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            state: ServiceState::Unknown,
            text: format!("{} upstream", name),
            name,
            hint: Some(reason.into()),
            perfdata: None,
            details: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Summary text, with the violation hint when there is one.
    pub fn summary(&self) -> String {
        match &self.hint {
            Some(hint) => format!("{} ({})", self.text, hint),
            None => self.text.clone(),
        }
    }

    /// Convert into the plugin crate's result. `verbose` decides whether
    /// the result contributes a long-output message.
    pub fn into_check_result(self, verbose: u8) -> CheckResult {
        let shown = match verbose {
            0 => false,
            1 => self.state != ServiceState::Ok,
            _ => true,
        };

        let mut result = CheckResult::new().with_state(self.state);
        if shown {
            let mut message = format!("{}: {}", self.state, self.summary());
            if verbose >= 2 {
                for detail in &self.details {
                    message.push_str("\n  ");
                    message.push_str(detail);
                }
            }
            result = result.with_message(message);
        }
        if let Some(perfdata) = self.perfdata {
            result = result.with_perf_data(perfdata);
        }
        result
    }
}
