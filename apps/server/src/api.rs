use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use finsim_core::portfolio::projection::{ProjectionOptions, ValuationReport};
use finsim_core::portfolio::summary::{summarize, CategorySummary};
use finsim_core::ValuationContext;
use finsim_market_data::{ForecastRequest, ForecastValidator};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::ApiResult,
    main_lib::AppState,
    models::{
        CanonicalProjectionRequest, ForecastValidationRequest, HealthResponse, ProjectionRequest,
        SummaryRequest,
    },
};

fn valuation_context(as_of: Option<chrono::NaiveDate>) -> ValuationContext {
    as_of
        .map(ValuationContext::new)
        .unwrap_or_else(ValuationContext::today)
}

pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn project(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProjectionRequest>,
) -> ApiResult<Json<ValuationReport>> {
    let portfolio = payload.snapshot.to_portfolio();
    let options = ProjectionOptions {
        refresh_prices: payload.refresh_prices,
    };
    let report = state
        .projection_service
        .project(&portfolio, valuation_context(payload.as_of), payload.horizon, options)
        .await?;
    Ok(Json(report))
}

async fn project_canonical(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CanonicalProjectionRequest>,
) -> ApiResult<Json<Vec<ValuationReport>>> {
    let portfolio = payload.snapshot.to_portfolio();
    let options = ProjectionOptions {
        refresh_prices: payload.refresh_prices,
    };
    let reports = state
        .projection_service
        .project_canonical(&portfolio, valuation_context(payload.as_of), options)
        .await?;
    Ok(Json(reports))
}

async fn summary(Json(payload): Json<SummaryRequest>) -> ApiResult<Json<Vec<CategorySummary>>> {
    let portfolio = payload.snapshot.to_portfolio();
    Ok(Json(summarize(&portfolio, &valuation_context(payload.as_of))))
}

async fn validate_forecast_request(
    Json(payload): Json<ForecastValidationRequest>,
) -> ApiResult<StatusCode> {
    let request = ForecastRequest::parse(
        &payload.asset_class,
        &payload.symbol,
        payload.invested_amount,
    )?;
    ForecastValidator::new().validate_request(&request)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/projection", post(project))
        .route("/projection/canonical", post(project_canonical))
        .route("/summary", post(summary))
        .route("/forecasts/validate", post(validate_forecast_request));

    Ok(Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http()))
}
