//! Core of the SC Buddy supply-chain calculator: the fixed metric catalog and
//! the pure evaluation engine, plus the config/telemetry/error scaffolding the
//! serving surfaces build on.

pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod telemetry;

pub use catalog::{FormulaRule, MetricCatalog, MetricCategory, MetricDefinition};
pub use evaluator::{evaluate, EvaluateError, EvaluationEngine, InputValues};
