use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sea_orm::entity::*;
use sea_orm::SqlErr;
use std::sync::Arc;
use tracing::info;

use super::MemberRequest;
use crate::familywish_errors::FWErr;
use crate::handler::{find_member_by_name, MemberView};
use crate::orm::model::member;
use crate::sharedstate::SharedState;
use crate::utils::auth::admin::AdminSession;

pub async fn add_family_member(
    State(sstate): State<Arc<SharedState>>,
    admin: AdminSession,
    Json(request): Json<MemberRequest>,
) -> Result<(StatusCode, Json<MemberView>), FWErr> {
    let (name, team_name) = request.normalized()?;
    let db = &*sstate.database;

    if find_member_by_name(&name, db).await?.is_some() {
        return Err(FWErr::MemberAlreadyExists(name));
    }

    let db_member = member::ActiveModel {
        name: Set(name.clone()),
        team_name: Set(team_name),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => FWErr::MemberAlreadyExists(name),
        _ => FWErr::from(err),
    })?;

    info!(target: "http", "Admin {} added {} to the family pool", admin.username, db_member.name);
    Ok((StatusCode::CREATED, Json(MemberView::from(&db_member))))
}
