use super::engine::QueryEngine;
use super::selector::column_choices;
use super::types::*;
use crate::error::JobDataError;
use crate::model::{Column, DimensionEntity, DimensionKind};

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, Router, routing::get};
use std::sync::Arc;

pub const ENDPOINT_LIST: &str = "/list";
pub const ENDPOINT_LIST_JOBS: &str = "/list/jobs";
pub const ENDPOINT_LIST_VALUES: &str = "/list/values";
pub const ENDPOINT_SEARCH: &str = "/search";
pub const ENDPOINT_SEARCH_RESULTS: &str = "/search/results";

/// Routes for the list and search pages, sharing one engine.
pub fn router(engine: Arc<QueryEngine>) -> Router {
    Router::new()
        .route(ENDPOINT_LIST, get(handle_list))
        .route(ENDPOINT_LIST_JOBS, get(handle_list_jobs))
        .route(ENDPOINT_LIST_VALUES, get(handle_list_values))
        .route(ENDPOINT_SEARCH, get(handle_search_page))
        .route(ENDPOINT_SEARCH_RESULTS, get(handle_search_results))
        .layer(Extension(engine))
}

pub async fn handle_list(Extension(engine): Extension<Arc<QueryEngine>>) -> Response {
    match list_page(&engine).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn list_page(engine: &QueryEngine) -> Result<ListPageResponse, JobDataError> {
    Ok(ListPageResponse {
        columns: choice_views(),
        employers: entity_values(&engine.dimension_entities(DimensionKind::Employer).await?),
        locations: entity_values(&engine.dimension_entities(DimensionKind::Location).await?),
        positions: entity_values(&engine.dimension_entities(DimensionKind::PositionType).await?),
        skills: entity_values(&engine.dimension_entities(DimensionKind::CoreCompetency).await?),
    })
}

pub async fn handle_list_jobs(
    Extension(engine): Extension<Arc<QueryEngine>>,
    Query(params): Query<ListJobsParams>,
) -> Response {
    match engine
        .list_jobs_by_column(&params.column, &params.value)
        .await
    {
        Ok(listing) => (
            StatusCode::OK,
            Json(JobsResponse::new(listing.title, &listing.jobs)),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_list_values(
    Extension(engine): Extension<Arc<QueryEngine>>,
    Query(params): Query<ListValuesParams>,
) -> Response {
    let kind: DimensionKind = match params.column.parse() {
        Ok(kind) => kind,
        Err(e) => return error_response(e),
    };

    match engine.distinct_values(kind).await {
        Ok(values) => (
            StatusCode::OK,
            Json(ValuesResponse {
                column: kind.key().to_string(),
                label: kind.label().to_string(),
                values,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_search_page() -> Json<SearchPageResponse> {
    Json(SearchPageResponse {
        columns: choice_views(),
    })
}

pub async fn handle_search_results(
    Extension(engine): Extension<Arc<QueryEngine>>,
    Query(params): Query<SearchParams>,
) -> Response {
    match engine
        .filter_by_column(&params.search_type, &params.search_term)
        .await
    {
        Ok(jobs) => {
            let label = params
                .search_type
                .parse::<Column>()
                .map(|column| column.label())
                .unwrap_or("All");
            let title = format!("Jobs with {}: {}", label, params.search_term);
            (StatusCode::OK, Json(JobsResponse::new(title, &jobs))).into_response()
        }
        Err(e) => error_response(e),
    }
}

fn choice_views() -> Vec<ColumnChoiceView> {
    column_choices().into_iter().map(Into::into).collect()
}

fn entity_values(entities: &[DimensionEntity]) -> Vec<String> {
    entities.iter().map(|e| e.value().to_string()).collect()
}

fn error_response(err: JobDataError) -> Response {
    let status = match err {
        JobDataError::InvalidDimensionKind(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("Query failed: {}", err);
    } else {
        tracing::debug!("Rejected query: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
