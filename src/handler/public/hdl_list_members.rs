use axum::extract::State;
use axum::Json;
use sea_orm::entity::*;
use sea_orm::query::*;
use serde::Serialize;
use std::sync::Arc;

use crate::familywish_errors::FWErr;
use crate::orm::model::member;
use crate::sharedstate::SharedState;

#[derive(Debug, Serialize)]
pub struct MemberNamesResponse {
    pub family_members: Vec<String>,
}

pub async fn list_members(
    State(sstate): State<Arc<SharedState>>,
) -> Result<Json<MemberNamesResponse>, FWErr> {
    let db_members = member::Entity::find()
        .order_by_asc(member::Column::Name)
        .all(&*sstate.database)
        .await?;

    Ok(Json(MemberNamesResponse {
        family_members: db_members.into_iter().map(|m| m.name).collect(),
    }))
}
