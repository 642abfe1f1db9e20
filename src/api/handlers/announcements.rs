use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::state::AppState,
    domain::{Announcement, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    error::Result,
};

/// Identifies the teacher performing a write. `teacher_username` wins when
/// both names are sent.
#[derive(Debug, Default, Deserialize)]
pub struct TeacherQuery {
    pub teacher_username: Option<String>,
    pub caller_identity: Option<String>,
}

impl TeacherQuery {
    pub fn caller(&self) -> Option<&str> {
        self.teacher_username
            .as_deref()
            .or(self.caller_identity.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

pub async fn list_active(State(state): State<AppState>) -> Result<Json<Vec<Announcement>>> {
    let announcements = state.service_context.announcement_service.list_active().await?;
    Ok(Json(announcements))
}

pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Announcement>>> {
    let announcements = state.service_context.announcement_service.list_all().await?;
    Ok(Json(announcements))
}

pub async fn create(
    State(state): State<AppState>,
    query: std::result::Result<Query<TeacherQuery>, QueryRejection>,
    payload: std::result::Result<Json<CreateAnnouncementRequest>, JsonRejection>,
) -> Result<Json<Announcement>> {
    let Query(query) = query?;
    let Json(request) = payload?;
    let created = state
        .service_context
        .announcement_service
        .create(request, query.caller())
        .await?;

    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: std::result::Result<Query<TeacherQuery>, QueryRejection>,
    payload: std::result::Result<Json<UpdateAnnouncementRequest>, JsonRejection>,
) -> Result<Json<Announcement>> {
    let Query(query) = query?;
    let Json(request) = payload?;
    let updated = state
        .service_context
        .announcement_service
        .update(&id, request, query.caller())
        .await?;

    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: std::result::Result<Query<TeacherQuery>, QueryRejection>,
) -> Result<Json<DeleteResponse>> {
    let Query(query) = query?;
    state
        .service_context
        .announcement_service
        .delete(&id, query.caller())
        .await?;

    Ok(Json(DeleteResponse {
        message: "Announcement deleted".to_string(),
    }))
}
