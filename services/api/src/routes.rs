use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use sc_buddy::catalog::{MetricCatalog, MetricDefinition};
use sc_buddy::evaluator::{EvaluationEngine, InputValues};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) categories: Vec<CategoryView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryView {
    pub(crate) name: &'static str,
    pub(crate) metrics: Vec<MetricView>,
}

/// Display card for one metric: everything the rendering layer needs to draw
/// the checklist entry and its input fields.
#[derive(Debug, Serialize)]
pub(crate) struct MetricView {
    pub(crate) name: &'static str,
    pub(crate) formula: &'static str,
    pub(crate) description: &'static str,
    pub(crate) inputs: Vec<&'static str>,
}

impl MetricView {
    fn from_definition(metric: &MetricDefinition) -> Self {
        Self {
            name: metric.name,
            formula: metric.formula,
            description: metric.description,
            inputs: metric.inputs(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    pub(crate) selections: Vec<MetricSelection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetricSelection {
    pub(crate) metric: String,
    #[serde(default)]
    pub(crate) inputs: InputValues,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluateResponse {
    pub(crate) results: Vec<MetricResultView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MetricResultView {
    pub(crate) metric: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) formula: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<&'static str>,
    pub(crate) outcome: MetricOutcome,
}

/// Per-metric outcome. Non-finite values (zero denominators) are still
/// `computed`; JSON renders them as null and the UI presents "check inputs".
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum MetricOutcome {
    Computed { value: f64 },
    NotComputable { reason: String },
}

pub(crate) fn api_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route("/api/v1/catalog/:metric_name", get(metric_endpoint))
        .route("/api/v1/metrics/evaluate", post(evaluate_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint() -> Json<CatalogResponse> {
    let catalog = MetricCatalog::shared();
    let categories = catalog
        .categories()
        .iter()
        .map(|category| CategoryView {
            name: category.name,
            metrics: category
                .metrics
                .iter()
                .map(MetricView::from_definition)
                .collect(),
        })
        .collect();

    Json(CatalogResponse { categories })
}

pub(crate) async fn metric_endpoint(Path(metric_name): Path<String>) -> impl IntoResponse {
    match MetricCatalog::shared().find(&metric_name) {
        Some(metric) => {
            (StatusCode::OK, Json(MetricView::from_definition(metric))).into_response()
        }
        None => {
            let payload = json!({ "error": format!("unknown metric '{metric_name}'") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

/// Evaluates each selected metric independently. An unknown name or a missing
/// input label turns into a `not_computable` entry; the request as a whole
/// never fails for it.
pub(crate) async fn evaluate_endpoint(
    Json(payload): Json<EvaluateRequest>,
) -> Json<EvaluateResponse> {
    let catalog = MetricCatalog::shared();
    let engine = EvaluationEngine::new(catalog);

    let results = payload
        .selections
        .into_iter()
        .map(|selection| {
            let metric = catalog.find(&selection.metric);
            let outcome = match engine.evaluate(&selection.metric, &selection.inputs) {
                Ok(value) => MetricOutcome::Computed { value },
                Err(err) => MetricOutcome::NotComputable {
                    reason: err.to_string(),
                },
            };

            MetricResultView {
                metric: selection.metric,
                formula: metric.map(|definition| definition.formula),
                description: metric.map(|definition| definition.description),
                outcome,
            }
        })
        .collect();

    Json(EvaluateResponse { results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn selection(metric: &str, inputs: &[(&str, f64)]) -> MetricSelection {
        MetricSelection {
            metric: metric.to_string(),
            inputs: inputs
                .iter()
                .map(|(label, value)| (label.to_string(), *value))
                .collect(),
        }
    }

    #[tokio::test]
    async fn catalog_endpoint_lists_every_category() {
        let Json(body) = catalog_endpoint().await;
        assert_eq!(body.categories.len(), 4);
        let inventory = &body.categories[0];
        assert_eq!(inventory.name, "Inventory Metrics");
        assert_eq!(inventory.metrics.len(), 3);
        assert_eq!(inventory.metrics[0].name, "Inventory Turnover");
        assert_eq!(
            inventory.metrics[0].inputs,
            vec!["Cost of Goods Sold (COGS)", "Average Inventory"]
        );
    }

    #[tokio::test]
    async fn evaluate_endpoint_mixes_computed_and_not_computable_entries() {
        let request = EvaluateRequest {
            selections: vec![
                selection(
                    "Fill Rate",
                    &[
                        ("Number of Orders Filled Completely", 90.0),
                        ("Total Number of Orders", 100.0),
                    ],
                ),
                selection("Unknown Metric X", &[]),
                selection("Inventory Turnover", &[("Average Inventory", 25.0)]),
            ],
        };

        let Json(body) = evaluate_endpoint(Json(request)).await;
        assert_eq!(body.results.len(), 3);

        match body.results[0].outcome {
            MetricOutcome::Computed { value } => assert_eq!(value, 0.9),
            ref other => panic!("expected computed fill rate, got {other:?}"),
        }
        assert!(body.results[0].formula.is_some());

        assert!(matches!(
            body.results[1].outcome,
            MetricOutcome::NotComputable { .. }
        ));
        assert!(body.results[1].formula.is_none());

        match &body.results[2].outcome {
            MetricOutcome::NotComputable { reason } => {
                assert!(reason.contains("Cost of Goods Sold (COGS)"));
            }
            other => panic!("expected missing-input entry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn evaluate_endpoint_reports_zero_denominator_as_computed() {
        let request = EvaluateRequest {
            selections: vec![selection(
                "Inventory Turnover",
                &[("Cost of Goods Sold (COGS)", 100.0), ("Average Inventory", 0.0)],
            )],
        };

        let Json(body) = evaluate_endpoint(Json(request)).await;
        match body.results[0].outcome {
            MetricOutcome::Computed { value } => assert!(value.is_infinite()),
            ref other => panic!("expected computed infinity, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn router_serves_the_evaluate_route() {
        let body = json!({
            "selections": [
                {
                    "metric": "Time to Market",
                    "inputs": { "Total Time from Product Design to Launch": 180.0 }
                }
            ]
        });

        let response = api_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/metrics/evaluate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(payload["results"][0]["outcome"]["status"], "computed");
        assert_eq!(payload["results"][0]["outcome"]["value"], 180.0);
    }

    #[tokio::test]
    async fn unknown_metric_card_is_a_404() {
        let response = api_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/catalog/Unknown%20Metric%20X")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
