// HTTP request handlers
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use user_actions_shared::types::{ActionsProbability, ReferralIndex, User, UserId};

use crate::errors::ApiError;
use crate::server::state::AppState;

/// Response body of the action count endpoint
#[derive(Debug, Serialize)]
pub struct ActionCount {
    pub count: usize,
}

/// Query parameters of the next-action endpoint
#[derive(Debug, Deserialize)]
pub struct NextActionParams {
    #[serde(rename = "type")]
    pub action_type: Option<String>,
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>()
        .map_err(|_| ApiError::InvalidUserId(raw.to_string()))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Returns a single user
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = state.service.get_user(id).await?;
    Ok(Json(user))
}

/// Returns the number of actions performed by a user
pub async fn count_user_actions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionCount>, ApiError> {
    let id = parse_user_id(&id)?;
    let count = state.service.count_actions(id).await?;
    Ok(Json(ActionCount { count }))
}

/// Returns the distribution of the action following the action type in the path
pub async fn next_action_probability(
    State(state): State<AppState>,
    Path(action_type): Path<String>,
) -> Result<Json<ActionsProbability>, ApiError> {
    let probabilities = state.service.next_action_probability(&action_type).await?;
    Ok(Json(probabilities))
}

/// Same as [`next_action_probability`], with the action type as `?type=`
pub async fn next_action_probability_by_query(
    State(state): State<AppState>,
    Query(params): Query<NextActionParams>,
) -> Result<Json<ActionsProbability>, ApiError> {
    let action_type = params.action_type.unwrap_or_default();
    let probabilities = state.service.next_action_probability(&action_type).await?;
    Ok(Json(probabilities))
}

/// Returns the referral index of every user who referred someone
pub async fn referral_index(
    State(state): State<AppState>,
) -> Result<Json<ReferralIndex>, ApiError> {
    let index = state.service.referral_index().await?;
    Ok(Json(index))
}
