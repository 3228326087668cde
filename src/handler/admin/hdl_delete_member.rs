use axum::extract::{Path, State};
use axum::Json;
use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::TransactionTrait;
use std::sync::Arc;
use tracing::info;

use crate::familywish_errors::FWErr;
use crate::handler::Notice;
use crate::orm::model::{member, secret_santa, wish};
use crate::sharedstate::SharedState;
use crate::utils::auth::admin::AdminSession;

/// Removes a member together with their wishes. The current Secret Santa
/// assignment no longer covers the roster afterwards and is cleared.
pub async fn delete_family_member(
    State(sstate): State<Arc<SharedState>>,
    admin: AdminSession,
    Path(member_id): Path<i64>,
) -> Result<Json<Notice>, FWErr> {
    let db = &*sstate.database;

    let Some(db_member) = member::Entity::find_by_id(member_id).one(db).await? else {
        return Ok(Json(Notice::new("Nothing to delete.")));
    };

    let txn = db.begin().await?;
    let deleted_wishes = wish::Entity::delete_many()
        .filter(wish::Column::MemberId.eq(member_id))
        .exec(&txn)
        .await?;
    member::Entity::delete_by_id(member_id).exec(&txn).await?;
    let cleared_pairs = secret_santa::Entity::delete_many().exec(&txn).await?;
    txn.commit().await?;

    info!(
        target: "http",
        "Admin {} removed {} ({} wishes, {} assignment pairs cleared)",
        admin.username,
        db_member.name,
        deleted_wishes.rows_affected,
        cleared_pairs.rows_affected
    );
    Ok(Json(Notice::new(format!(
        "Removed {} from the family pool.",
        db_member.name
    ))))
}
