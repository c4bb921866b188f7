use metrics_exporter_prometheus::PrometheusHandle;
use sc_buddy::catalog::MetricDefinition;
use sc_buddy::evaluator::InputValues;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses a `--input "Label=value"` argument.
pub(crate) fn parse_input(raw: &str) -> Result<(String, f64), String> {
    let (label, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=VALUE, got '{raw}'"))?;

    let label = label.trim();
    if label.is_empty() {
        return Err(format!("empty input label in '{raw}'"));
    }

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{}' as a number ({err})", value.trim()))?;

    Ok((label.to_string(), value))
}

/// Deterministic non-zero values for a metric's inputs, so demos and smoke
/// tests always produce a finite result.
pub(crate) fn sample_inputs(metric: &MetricDefinition) -> InputValues {
    metric
        .inputs()
        .into_iter()
        .enumerate()
        .map(|(position, label)| (label.to_string(), (position as f64 + 1.0) * 50.0))
        .collect()
}
