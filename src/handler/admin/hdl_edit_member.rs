use axum::extract::{Path, State};
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

pub async fn edit_family_member(
    State(sstate): State<Arc<SharedState>>,
    admin: AdminSession,
    Path(member_id): Path<i64>,
    Json(request): Json<MemberRequest>,
) -> Result<Json<MemberView>, FWErr> {
    let (new_name, team_name) = request.normalized()?;
    let db = &*sstate.database;

    let Some(db_member) = member::Entity::find_by_id(member_id).one(db).await? else {
        return Err(FWErr::MemberNotFound(member_id.to_string()));
    };

    if let Some(other) = find_member_by_name(&new_name, db).await? {
        if other.id != member_id {
            return Err(FWErr::MemberAlreadyExists(new_name));
        }
    }

    // Wishes and assignments reference the id, a rename needs no cascade
    let old_name = db_member.name.clone();
    let mut db_member = db_member.into_active_model();
    db_member.name = Set(new_name.clone());
    db_member.team_name = Set(team_name);
    let db_member = db_member.update(db).await.map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => FWErr::MemberAlreadyExists(new_name),
        _ => FWErr::from(err),
    })?;

    info!(
        target: "http",
        "Admin {} updated {} to {}", admin.username, old_name, db_member.name
    );
    Ok(Json(MemberView::from(&db_member)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::testing::{add_member, add_wish};
    use crate::orm::model::wish;
    use crate::sharedstate::testing::test_state;
    use sea_orm::query::*;

    fn admin() -> AdminSession {
        AdminSession {
            username: "admin".to_string(),
        }
    }

    fn request(name: &str, team: Option<&str>) -> Json<MemberRequest> {
        Json(MemberRequest {
            name: name.to_string(),
            team_name: team.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn rename_keeps_wishes() {
        let sstate = test_state().await;
        let db_member = add_member(&sstate.database, "Lukas", None).await;
        add_wish(&sstate.database, db_member.id, "Bike").await;

        let Json(view) = edit_family_member(
            State(sstate.clone()),
            admin(),
            Path(db_member.id),
            request("Luke", Some("Weber")),
        )
        .await
        .unwrap();
        assert_eq!(view.name, "Luke");
        assert_eq!(view.team_name.as_deref(), Some("Weber"));

        let wishes = wish::Entity::find()
            .filter(wish::Column::MemberId.eq(db_member.id))
            .all(&*sstate.database)
            .await
            .unwrap();
        assert_eq!(wishes.len(), 1);
    }

    #[tokio::test]
    async fn keeping_the_same_name_is_allowed() {
        let sstate = test_state().await;
        let db_member = add_member(&sstate.database, "Lukas", Some("A")).await;
        let Json(view) = edit_family_member(
            State(sstate),
            admin(),
            Path(db_member.id),
            request("Lukas", None),
        )
        .await
        .unwrap();
        assert_eq!(view.team_name, None);
    }

    #[tokio::test]
    async fn taken_name_conflicts() {
        let sstate = test_state().await;
        add_member(&sstate.database, "Lukas", None).await;
        let other = add_member(&sstate.database, "Emma", None).await;
        let result = edit_family_member(
            State(sstate),
            admin(),
            Path(other.id),
            request("Lukas", None),
        )
        .await;
        assert!(matches!(result, Err(FWErr::MemberAlreadyExists(_))));
    }

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let sstate = test_state().await;
        let result =
            edit_family_member(State(sstate), admin(), Path(77), request("Nobody", None)).await;
        assert!(matches!(result, Err(FWErr::MemberNotFound(_))));
    }
}
