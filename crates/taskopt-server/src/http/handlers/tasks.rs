//! Task pool handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{error, info, warn};

use taskopt_core::Task;

use crate::http::error::ApiError;
use crate::http::responses::AppendResponse;
use crate::state::AppState;
use crate::store::StoreError;

/// List every pending task.
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<Vec<Task>> {
    Json(state.store.list_all().await)
}

/// Append a batch of tasks to the pool.
pub async fn add_tasks(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<Task>>, JsonRejection>,
) -> Result<Json<AppendResponse>, ApiError> {
    let Json(tasks) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected task batch");
        ApiError::BadRequest(rejection.body_text())
    })?;

    let added = tasks.len();
    let pool_size = state.store.append(tasks).await.map_err(|err| {
        warn!(error = %err, "Rejected task batch");
        ApiError::from(err)
    })?;
    state.metrics.set_task_list_size(pool_size);

    info!(added, pool_size, "Tasks added");
    Ok(Json(AppendResponse { added, pool_size }))
}

/// Remove and return the most profitable set of compatible tasks.
pub async fn execute_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let started = Instant::now();

    match state
        .store
        .extract_higher_profit_subset(state.search_timeout)
        .await
    {
        Ok(extraction) => {
            state.metrics.record_extraction(&extraction);
            Ok(Json(extraction.tasks))
        }
        Err(err) => {
            if let StoreError::SearchTimedOut { input_size, .. } = &err {
                state
                    .metrics
                    .record_failed_extraction(*input_size, started.elapsed());
            }
            error!(error = %err, "Optimization failed");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use axum::{http::StatusCode, response::IntoResponse};

    use crate::config::Config;

    fn task(name: &str, resources: &[&str], profit: f64) -> Task {
        Task::new(name, resources.iter().copied(), profit).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let state = AppState::new(&Config::default());

        let Json(response) = add_tasks(
            State(state.clone()),
            Ok(Json(vec![task("a", &["r1"], 1.0), task("b", &["r1"], 2.0)])),
        )
        .await
        .unwrap();
        assert_eq!(
            response,
            AppendResponse {
                added: 2,
                pool_size: 2
            }
        );

        let Json(tasks) = list_tasks(State(state.clone())).await;
        assert_eq!(tasks.len(), 2);
        assert!(state.metrics.render().contains("taskopt_task_list_size 2"));
    }

    #[tokio::test]
    async fn test_add_rejects_non_finite_profit() {
        let state = AppState::new(&Config::default());
        let bad = Task {
            name: "bad".to_string(),
            resources: Default::default(),
            profit: f64::INFINITY,
        };

        let err = add_tasks(State(state.clone()), Ok(Json(vec![bad])))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert!(state.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_execute_returns_winners_and_keeps_remainder() {
        let state = AppState::new(&Config::default());
        state
            .store
            .append(vec![
                task("render", &["gpu"], 5.0),
                task("train", &["gpu", "disk"], 8.0),
                task("backup", &["disk"], 2.0),
                task("email", &["smtp"], 1.0),
            ])
            .await
            .unwrap();

        let Json(winners) = execute_tasks(State(state.clone())).await.unwrap();
        let names: Vec<&str> = winners.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["train", "email"]);

        let Json(remaining) = list_tasks(State(state.clone())).await;
        let names: Vec<&str> = remaining.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["render", "backup"]);

        let metrics = state.metrics.render();
        assert!(metrics.contains("taskopt_processing_duration_seconds_count 1"));
        assert!(metrics.contains("taskopt_search_duration_seconds_count 1"));
        assert!(metrics.contains("taskopt_input_task_list_size_sum 4"));
        assert!(metrics.contains("taskopt_task_list_size 2"));
    }

    #[tokio::test]
    async fn test_execute_timeout_is_service_unavailable() {
        let config = Config {
            search_timeout_secs: Some(0),
            ..Config::default()
        };
        let state = AppState::new(&config);
        assert_eq!(state.search_timeout, Some(Duration::ZERO));

        // Cocktail-party graph: 2^20 maximal cliques, far more than a zero timeout allows.
        let pool: Vec<Task> = (0..40)
            .map(|i| task(&format!("t{i}"), &[format!("r{}", i % 20).as_str()], 1.0))
            .collect();
        state.store.append(pool).await.unwrap();

        let err = execute_tasks(State(state.clone())).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Store(StoreError::SearchTimedOut { input_size: 40, .. })
        ));
        assert_eq!(
            err.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(state.store.len().await, 40);
        assert!(state
            .metrics
            .render()
            .contains("taskopt_search_duration_seconds_count 0"));
    }
}
