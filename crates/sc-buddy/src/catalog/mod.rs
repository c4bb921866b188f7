//! Static registry of supply-chain metrics.
//!
//! The catalog is a constant table: categories in display order, each holding
//! metric cards with the display formula, a description, and the rule the
//! evaluator dispatches on. It is built once per process and never mutated.

mod data;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

/// Arithmetic shape of a metric. The required-input list is derived from the
/// rule, so the catalog entry and the evaluator can never disagree about which
/// labels a metric needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormulaRule {
    /// numerator / denominator
    Ratio {
        numerator: &'static str,
        denominator: &'static str,
    },
    /// A single input reported as-is (e.g. Time to Market).
    PassThrough { input: &'static str },
}

impl FormulaRule {
    /// Required input labels, in the order the UI should render them.
    pub fn inputs(&self) -> Vec<&'static str> {
        match self {
            FormulaRule::Ratio {
                numerator,
                denominator,
            } => vec![numerator, denominator],
            FormulaRule::PassThrough { input } => vec![input],
        }
    }
}

/// One metric card: everything the rendering layer displays, plus the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
    pub rule: FormulaRule,
}

impl MetricDefinition {
    pub fn inputs(&self) -> Vec<&'static str> {
        self.rule.inputs()
    }
}

/// A named group of metrics, kept in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCategory {
    pub name: &'static str,
    pub metrics: Vec<MetricDefinition>,
}

/// The full metric registry with a by-name index for O(1) lookup.
///
/// Metric names are unique across the whole catalog; the evaluator dispatches
/// on the name alone and ignores the category.
#[derive(Debug)]
pub struct MetricCatalog {
    categories: Vec<MetricCategory>,
    index: HashMap<&'static str, (usize, usize)>,
}

impl MetricCatalog {
    /// Builds the standard SC Buddy catalog from the constant table.
    pub fn standard() -> Self {
        Self::from_categories(data::standard_categories())
    }

    fn from_categories(categories: Vec<MetricCategory>) -> Self {
        let mut index = HashMap::new();
        for (category_idx, category) in categories.iter().enumerate() {
            for (metric_idx, metric) in category.metrics.iter().enumerate() {
                index.insert(metric.name, (category_idx, metric_idx));
            }
        }
        Self { categories, index }
    }

    /// Process-wide catalog, initialized on first use and read-only after.
    pub fn shared() -> &'static MetricCatalog {
        static CATALOG: OnceLock<MetricCatalog> = OnceLock::new();
        CATALOG.get_or_init(MetricCatalog::standard)
    }

    pub fn categories(&self) -> &[MetricCategory] {
        &self.categories
    }

    /// Looks up a metric by exact name; `None` means the name is unknown and
    /// the caller should surface an error rather than crash.
    pub fn find(&self, name: &str) -> Option<&MetricDefinition> {
        let (category_idx, metric_idx) = *self.index.get(name)?;
        Some(&self.categories[category_idx].metrics[metric_idx])
    }

    /// All metric names in catalog display order.
    pub fn metric_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories
            .iter()
            .flat_map(|category| category.metrics.iter().map(|metric| metric.name))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
