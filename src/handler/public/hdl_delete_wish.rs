use axum::extract::{Path, State};
use axum::Json;
use sea_orm::entity::*;
use std::sync::Arc;
use tracing::info;

use crate::familywish_errors::FWErr;
use crate::handler::Notice;
use crate::orm::model::wish;
use crate::sharedstate::SharedState;

pub async fn delete_wish(
    State(sstate): State<Arc<SharedState>>,
    Path(wish_id): Path<i64>,
) -> Result<Json<Notice>, FWErr> {
    let result = wish::Entity::delete_by_id(wish_id)
        .exec(&*sstate.database)
        .await?;
    if result.rows_affected == 0 {
        return Err(FWErr::WishNotFound(wish_id));
    }
    info!(target: "http", "Wish {} deleted", wish_id);
    Ok(Json(Notice::new("Wish deleted.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::testing::{add_member, add_wish};
    use crate::sharedstate::testing::test_state;

    #[tokio::test]
    async fn deletes_existing_wish_once() {
        let sstate = test_state().await;
        let db_member = add_member(&sstate.database, "Jonas", None).await;
        let db_wish = add_wish(&sstate.database, db_member.id, "Drum kit").await;

        assert!(delete_wish(State(sstate.clone()), Path(db_wish.id)).await.is_ok());
        assert!(matches!(
            delete_wish(State(sstate), Path(db_wish.id)).await,
            Err(FWErr::WishNotFound(_))
        ));
    }
}
