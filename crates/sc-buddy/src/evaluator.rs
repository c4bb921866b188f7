//! Pure evaluation of catalog metrics.
//!
//! Every evaluation is an independent computation over one transient set of
//! input values: no I/O, no logging, no state carried between calls.

use std::collections::HashMap;

use crate::catalog::{FormulaRule, MetricCatalog, MetricDefinition};

/// Input label → value mapping for a single evaluation call.
pub type InputValues = HashMap<String, f64>;

/// Why a metric could not be computed. Both cases are reported to the caller
/// as data; neither is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    #[error("unknown metric '{0}'")]
    UnknownMetric(String),
    #[error("metric '{metric}' is missing required input '{label}'")]
    MissingInput { metric: String, label: String },
}

/// Stateless engine dispatching metric names against a catalog.
pub struct EvaluationEngine<'c> {
    catalog: &'c MetricCatalog,
}

impl<'c> EvaluationEngine<'c> {
    pub fn new(catalog: &'c MetricCatalog) -> Self {
        Self { catalog }
    }

    /// Computes a metric from the supplied input values.
    ///
    /// Division follows IEEE 754: a zero denominator yields positive or
    /// negative infinity, or NaN when the numerator is also zero. Non-finite
    /// results are valid outputs for the caller to present, never errors.
    ///
    /// A missing label is a defensive fallback: callers are expected to have
    /// collected every required label from the catalog before evaluating.
    pub fn evaluate(&self, metric_name: &str, inputs: &InputValues) -> Result<f64, EvaluateError> {
        let metric = self
            .catalog
            .find(metric_name)
            .ok_or_else(|| EvaluateError::UnknownMetric(metric_name.to_string()))?;

        apply_rule(metric, inputs)
    }
}

/// Evaluates against the process-wide catalog.
pub fn evaluate(metric_name: &str, inputs: &InputValues) -> Result<f64, EvaluateError> {
    EvaluationEngine::new(MetricCatalog::shared()).evaluate(metric_name, inputs)
}

fn apply_rule(metric: &MetricDefinition, inputs: &InputValues) -> Result<f64, EvaluateError> {
    let fetch = |label: &'static str| {
        inputs
            .get(label)
            .copied()
            .ok_or_else(|| EvaluateError::MissingInput {
                metric: metric.name.to_string(),
                label: label.to_string(),
            })
    };

    match metric.rule {
        FormulaRule::Ratio {
            numerator,
            denominator,
        } => Ok(fetch(numerator)? / fetch(denominator)?),
        FormulaRule::PassThrough { input } => fetch(input),
    }
}
