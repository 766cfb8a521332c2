use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::jwt::AuthUser,
    error::{AppResult, MessageBody},
    scores::{
        dto::{ScoreQuery, SubmitScoreRequest},
        repo_types::ScoreRecord,
        services,
    },
    state::AppState,
};

pub fn score_routes() -> Router<AppState> {
    Router::new().route("/high-scores", get(list_high_scores).post(submit_high_score))
}

/// POST /high-scores. The token is checked before the body is looked at.
#[instrument(skip(state, payload))]
pub async fn submit_high_score(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageBody>)> {
    let Json(payload) = payload?;
    let record = payload.validate()?;
    services::submit(&state, &caller, record).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageBody {
            message: "High score posted successfully".into(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_high_scores(
    State(state): State<AppState>,
    query: Result<Query<ScoreQuery>, QueryRejection>,
) -> AppResult<Json<Vec<ScoreRecord>>> {
    let Query(q) = query?;
    let page = services::query(&state, q).await?;
    Ok(Json(page))
}
