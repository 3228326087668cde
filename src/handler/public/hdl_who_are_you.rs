use axum::extract::State;
use axum::Json;
use sea_orm::entity::*;
use sea_orm::query::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::familywish_errors::FWErr;
use crate::orm::model::member;
use crate::sharedstate::SharedState;
use crate::utils::auth::identity::IdentityErr;
use crate::utils::auth::jwt::get_jwt_for_members;

#[derive(Debug, Deserialize)]
pub struct WhoAreYouRequest {
    #[serde(default)]
    pub selected_members: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct WhoAreYouResponse {
    pub token: String,
    pub selected_members: Vec<String>,
}

pub async fn who_are_you(
    State(sstate): State<Arc<SharedState>>,
    Json(request): Json<WhoAreYouRequest>,
) -> Result<Json<WhoAreYouResponse>, FWErr> {
    if request.selected_members.is_empty() {
        return Err(FWErr::IdentityError(IdentityErr::NoMembersSelected));
    }

    // Unknown names are dropped silently
    let db_members = member::Entity::find()
        .filter(member::Column::Name.is_in(request.selected_members))
        .order_by_asc(member::Column::Name)
        .all(&*sstate.database)
        .await?;
    if db_members.is_empty() {
        return Err(FWErr::IdentityError(IdentityErr::NoMembersSelected));
    }

    let member_ids: Vec<i64> = db_members.iter().map(|m| m.id).collect();
    let token = get_jwt_for_members(&member_ids, &sstate.server_secret, sstate.token_ttl_hours)?;
    let selected_members: Vec<String> = db_members.into_iter().map(|m| m.name).collect();
    info!(target: "http", "Identity selected: {}", selected_members.join(", "));

    Ok(Json(WhoAreYouResponse {
        token,
        selected_members,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sharedstate::testing::test_state;
    use crate::utils::auth::jwt::get_claims_from_jwt;

    #[tokio::test]
    async fn token_names_only_known_members() {
        let sstate = test_state().await;
        let db_member = member::ActiveModel {
            name: Set("Lina".to_string()),
            team_name: Set(None),
            ..Default::default()
        }
        .insert(&*sstate.database)
        .await
        .unwrap();

        let request = WhoAreYouRequest {
            selected_members: vec!["Lina".to_string(), "Ghost".to_string()],
        };
        let Json(response) = who_are_you(State(sstate.clone()), Json(request))
            .await
            .unwrap();
        assert_eq!(response.selected_members, vec!["Lina"]);
        let claims = get_claims_from_jwt(&response.token, &sstate.server_secret).unwrap();
        assert_eq!(claims.members, vec![db_member.id]);
    }

    #[tokio::test]
    async fn empty_selection_is_rejected() {
        let sstate = test_state().await;
        let request = WhoAreYouRequest {
            selected_members: vec!["Nobody".to_string()],
        };
        let result = who_are_you(State(sstate), Json(request)).await;
        assert!(matches!(
            result,
            Err(FWErr::IdentityError(IdentityErr::NoMembersSelected))
        ));
    }
}
