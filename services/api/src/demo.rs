use crate::infra::sample_inputs;
use clap::Args;
use sc_buddy::catalog::{MetricCatalog, MetricDefinition};
use sc_buddy::error::AppError;
use sc_buddy::evaluator::{EvaluationEngine, InputValues};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Metric to evaluate (repeatable; defaults to the whole catalog)
    #[arg(long = "metric")]
    pub(crate) metrics: Vec<String>,
    /// Input value as "Label=value" (repeatable; unset labels use sample values)
    #[arg(long = "input", value_parser = crate::infra::parse_input)]
    pub(crate) inputs: Vec<(String, f64)>,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Exact metric name, e.g. "Inventory Turnover"
    pub(crate) metric: String,
}

pub(crate) fn run_catalog_list() -> Result<(), AppError> {
    let catalog = MetricCatalog::shared();

    for category in catalog.categories() {
        println!("{}", category.name);
        println!("{}", "=".repeat(category.name.len()));
        for metric in &category.metrics {
            print_card(metric);
        }
    }

    Ok(())
}

pub(crate) fn run_catalog_show(args: ShowArgs) -> Result<(), AppError> {
    let metric = MetricCatalog::shared()
        .find(&args.metric)
        .ok_or_else(|| AppError::InvalidArgument(format!("unknown metric '{}'", args.metric)))?;

    print_card(metric);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = MetricCatalog::shared();
    let engine = EvaluationEngine::new(catalog);

    let selection = resolve_selection(catalog, &args.metrics)?;
    let overrides: InputValues = args.inputs.into_iter().collect();

    for metric in selection {
        let mut inputs = sample_inputs(metric);
        for label in metric.inputs() {
            if let Some(value) = overrides.get(label) {
                inputs.insert(label.to_string(), *value);
            }
        }

        print_card(metric);
        for label in metric.inputs() {
            println!("    {label} = {}", inputs[label]);
        }

        match engine.evaluate(metric.name, &inputs) {
            Ok(result) => println!("  Result: {result}"),
            Err(err) => println!("  Not computable: {err}"),
        }
        println!();
    }

    Ok(())
}

fn resolve_selection<'c>(
    catalog: &'c MetricCatalog,
    requested: &[String],
) -> Result<Vec<&'c MetricDefinition>, AppError> {
    if requested.is_empty() {
        return Ok(catalog
            .categories()
            .iter()
            .flat_map(|category| category.metrics.iter())
            .collect());
    }

    requested
        .iter()
        .map(|name| {
            catalog
                .find(name)
                .ok_or_else(|| AppError::InvalidArgument(format!("unknown metric '{name}'")))
        })
        .collect()
}

fn print_card(metric: &MetricDefinition) {
    println!("- {}", metric.name);
    println!("  Formula: {}", metric.formula);
    println!("  Description: {}", metric.description);
    println!("  Inputs: {}", metric.inputs().join(", "));
}
