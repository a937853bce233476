use std::str::FromStr;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::IntoResponse,
};
use portfolio_contact::{ContactRow, DEFAULT_LIST_LIMIT, ListInput, Status, SubmitInput};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{error::ApiError, routes::AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
    pub status: Status,
}

impl From<ContactRow> for ContactResponse {
    fn from(row: ContactRow) -> Self {
        let timestamp = OffsetDateTime::from_unix_timestamp(row.created_at)
            .ok()
            .and_then(|date| date.format(&Rfc3339).ok())
            .unwrap_or_default();

        Self {
            status: row.status(),
            id: row.id,
            name: row.name,
            email: row.email,
            subject: row.subject,
            message: row.message,
            timestamp,
        }
    }
}

fn parse_status(value: &str) -> Result<Status, ApiError> {
    Status::from_str(value).map_err(|_| ApiError::BadRequest("Invalid status".to_string()))
}

/// GET /api/
pub async fn root() -> impl IntoResponse {
    Json(json!({"message": "Portfolio API is running"}))
}

/// POST /api/contact
pub async fn create(
    State(app): State<AppState>,
    input: Result<Json<SubmitInput>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(input) = input.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    let row = app.contact_command.submit(input).await?;

    Ok(Json(row.into()))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub status: Option<String>,
}

/// GET /api/contact?limit=&status=
pub async fn list(
    State(app): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<ContactResponse>>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let status = params.status.as_deref().map(parse_status).transpose()?;

    let rows = app
        .contact_query
        .list(ListInput {
            status,
            limit: params.limit.unwrap_or(DEFAULT_LIST_LIMIT),
        })
        .await?;

    Ok(Json(rows.into_iter().map(ContactResponse::from).collect()))
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}

/// PATCH /api/contact/{id}/status?status=
pub async fn update_status(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<StatusParams>,
) -> Result<impl IntoResponse, ApiError> {
    let status = parse_status(params.status.as_deref().unwrap_or_default())?;

    if !app.contact_command.update_status(&id, status).await? {
        return Err(ApiError::NotFound("Message not found".to_string()));
    }

    Ok(Json(json!({"message": "Status updated successfully"})))
}
