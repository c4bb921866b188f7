use sc_buddy::catalog::{FormulaRule, MetricCatalog};
use sc_buddy::evaluator::{evaluate, EvaluateError, InputValues};

fn populated_inputs(labels: &[&'static str]) -> InputValues {
    labels
        .iter()
        .enumerate()
        .map(|(position, label)| (label.to_string(), (position as f64 + 1.0) * 25.0))
        .collect()
}

#[test]
fn worked_examples_match_the_algebraic_formulas() {
    let mut inputs = InputValues::new();
    inputs.insert("Cost of Goods Sold (COGS)".to_string(), 100.0);
    inputs.insert("Average Inventory".to_string(), 25.0);
    assert_eq!(evaluate("Inventory Turnover", &inputs), Ok(4.0));

    let mut inputs = InputValues::new();
    inputs.insert("Number of Orders Filled Completely".to_string(), 90.0);
    inputs.insert("Total Number of Orders".to_string(), 100.0);
    assert_eq!(evaluate("Fill Rate", &inputs), Ok(0.9));

    let mut inputs = InputValues::new();
    inputs.insert(
        "Total Time from Product Design to Launch".to_string(),
        180.0,
    );
    assert_eq!(evaluate("Time to Market", &inputs), Ok(180.0));
}

#[test]
fn every_catalog_metric_is_computable_from_its_own_labels() {
    let catalog = MetricCatalog::shared();

    for category in catalog.categories() {
        for metric in &category.metrics {
            let labels = metric.inputs();
            let inputs = populated_inputs(&labels);
            let result = evaluate(metric.name, &inputs)
                .unwrap_or_else(|err| panic!("{}: unexpected {err}", metric.name));

            let expected = match metric.rule {
                FormulaRule::Ratio {
                    numerator,
                    denominator,
                } => inputs[numerator] / inputs[denominator],
                FormulaRule::PassThrough { input } => inputs[input],
            };

            assert!(result.is_finite(), "{} produced {result}", metric.name);
            assert_eq!(result, expected, "{} mismatch", metric.name);
        }
    }
}

#[test]
fn unknown_metric_reports_not_computable() {
    let result = evaluate("Unknown Metric X", &InputValues::new());
    assert_eq!(
        result,
        Err(EvaluateError::UnknownMetric("Unknown Metric X".to_string()))
    );
}

#[test]
fn missing_label_reports_not_computable() {
    let mut inputs = InputValues::new();
    inputs.insert("Average Inventory".to_string(), 25.0);
    let result = evaluate("Inventory Turnover", &inputs);
    assert!(matches!(result, Err(EvaluateError::MissingInput { .. })));
}

#[test]
fn zero_denominators_yield_ieee_results_for_every_ratio_metric() {
    let catalog = MetricCatalog::shared();

    for category in catalog.categories() {
        for metric in &category.metrics {
            let FormulaRule::Ratio {
                numerator,
                denominator,
            } = metric.rule
            else {
                continue;
            };

            let mut inputs = InputValues::new();
            inputs.insert(numerator.to_string(), 50.0);
            inputs.insert(denominator.to_string(), 0.0);

            let result = evaluate(metric.name, &inputs)
                .unwrap_or_else(|err| panic!("{}: unexpected {err}", metric.name));
            assert!(
                result.is_infinite() && result > 0.0,
                "{} with zero denominator produced {result}",
                metric.name
            );
        }
    }
}
