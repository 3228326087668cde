use axum::extract::{Path, State};
use axum::Json;
use sea_orm::entity::*;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::familywish_errors::FWErr;
use crate::handler::WishView;
use crate::orm::model::{member, wish};
use crate::sharedstate::SharedState;

#[derive(Debug, Deserialize)]
pub struct ReserveWishRequest {
    pub reserved: bool,
}

pub async fn reserve_wish(
    State(sstate): State<Arc<SharedState>>,
    Path(wish_id): Path<i64>,
    Json(request): Json<ReserveWishRequest>,
) -> Result<Json<WishView>, FWErr> {
    let db = &*sstate.database;
    let Some(db_wish) = wish::Entity::find_by_id(wish_id).one(db).await? else {
        return Err(FWErr::WishNotFound(wish_id));
    };

    let mut db_wish = db_wish.into_active_model();
    db_wish.reserved = Set(request.reserved);
    let db_wish = db_wish.update(db).await?;
    info!(target: "http", "Wish {} reserved={}", wish_id, request.reserved);

    let person_name = member::Entity::find_by_id(db_wish.member_id)
        .one(db)
        .await?
        .map(|m| m.name)
        .unwrap_or_default();
    Ok(Json(WishView::new(&db_wish, &person_name)))
}
