use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use service::mail::MailEntry;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Serialize, Debug)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Serialize, Debug)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// 创建邮件，id 由服务端生成
pub async fn create_mail(
    State(state): State<ServerState>,
    payload: Result<Json<MailEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(entry) = payload?;
    let id = state.mail.add(entry).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// 删除邮件；不存在时返回 `{"deleted": false}`
pub async fn delete_mail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = state.mail.delete(&id).await?;
    Ok(Json(DeletedResponse { deleted }))
}

/// 获取邮件；不存在时返回 `null`
pub async fn get_mail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Option<MailEntry>>, ApiError> {
    Ok(Json(state.mail.get(&id).await?))
}

pub async fn inbox(
    State(state): State<ServerState>,
    Path(recipient): Path<String>,
) -> Result<Json<Vec<MailEntry>>, ApiError> {
    Ok(Json(state.mail.list_by_recipient(&recipient).await?))
}

pub async fn sent(
    State(state): State<ServerState>,
    Path(sender): Path<String>,
) -> Result<Json<Vec<MailEntry>>, ApiError> {
    Ok(Json(state.mail.list_by_sender(&sender).await?))
}
