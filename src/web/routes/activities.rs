use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::models::Activity;
use crate::services::roster_service;
use crate::store::{RosterError, SharedActivityStore};

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(store): State<SharedActivityStore>,
) -> Json<HashMap<String, Activity>> {
    Json(roster_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<SharedActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    roster_service::sign_up(&store, &activity_name, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            tracing::warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            error_response(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<SharedActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    roster_service::unregister(&store, &activity_name, &query.email)
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            tracing::warn!(activity = %activity_name, email = %query.email, error = %e, "unregister rejected");
            error_response(e)
        })
}

// NotFound for an unknown activity, BadRequest for the state conflicts.
// The `detail` field is what existing consumers match on.
fn error_response(err: RosterError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
        RosterError::AlreadySignedUp | RosterError::NotRegistered | RosterError::ActivityFull => {
            StatusCode::BAD_REQUEST
        }
    };
    (status, Json(serde_json::json!({ "detail": err.to_string() })))
}
