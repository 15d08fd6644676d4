use crate::currency::format_usd;
use crate::errors::AppError;
use crate::models::{
    CompletionProof, GoalRequest, GoalResponse, NewPromo, PriorityRequest, Promo, StatsResponse,
};
use crate::state::AppState;
use crate::stats::{build_history, build_queue, build_stats};
use crate::storage::persist_data;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    let stats = build_stats(&data, state.default_goal);
    for issue in &stats.issues {
        warn!(promo_id = %issue.promo_id, kind = ?issue.kind, "inconsistent promo record");
    }
    Ok(Json(stats))
}

pub async fn get_queue(State(state): State<AppState>) -> Json<Vec<Promo>> {
    let data = state.data.lock().await;
    Json(build_queue(&data))
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<Promo>> {
    let data = state.data.lock().await;
    Json(build_history(&data))
}

pub async fn add_promo(
    State(state): State<AppState>,
    Json(payload): Json<NewPromo>,
) -> Result<Json<Promo>, AppError> {
    let mut data = state.data.lock().await;
    let promo = data.add_promo(payload, Uuid::new_v4().to_string(), Utc::now())?;
    persist_data(&state.data_path, &data).await?;

    info!(
        promo_id = %promo.id,
        client = %promo.client_name,
        amount = %format_usd(promo.earned()),
        "promo added"
    );
    Ok(Json(promo))
}

pub async fn complete_promo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<CompletionProof>>,
) -> Result<Json<Promo>, AppError> {
    let proof = payload.map(|Json(proof)| proof).unwrap_or_default();
    let mut data = state.data.lock().await;
    let promo = data.complete_promo(&id, proof, Utc::now())?;
    persist_data(&state.data_path, &data).await?;

    info!(promo_id = %id, amount = %format_usd(promo.earned()), "promo completed");
    Ok(Json(promo))
}

pub async fn set_priority(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PriorityRequest>,
) -> Result<Json<Promo>, AppError> {
    let mut data = state.data.lock().await;
    let promo = data.set_priority(&id, payload.priority)?;
    persist_data(&state.data_path, &data).await?;

    info!(promo_id = %id, priority = promo.priority, "priority updated");
    Ok(Json(promo))
}

pub async fn delete_promo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    data.delete_promo(&id)?;
    persist_data(&state.data_path, &data).await?;

    info!(promo_id = %id, "promo deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<GoalResponse>, AppError> {
    let mut data = state.data.lock().await;
    let goal = data.set_goal(payload.monthly_goal)?;
    persist_data(&state.data_path, &data).await?;

    let formatted = format_usd(goal);
    info!(goal = %formatted, "monthly goal updated");
    Ok(Json(GoalResponse {
        monthly_goal: goal,
        formatted,
    }))
}
