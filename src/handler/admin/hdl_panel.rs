use axum::extract::State;
use axum::Json;
use sea_orm::entity::*;
use sea_orm::query::*;
use serde::Serialize;
use std::sync::Arc;

use crate::familywish_errors::FWErr;
use crate::handler::{member_names_by_id, MemberView, WishView};
use crate::orm::model::{member, wish};
use crate::secret_santa::AssignmentStore;
use crate::sharedstate::SharedState;
use crate::utils::auth::admin::AdminSession;
use crate::utils::settings::get_wish_deadline;

#[derive(Debug, Serialize)]
pub struct PairView {
    pub giver_name: String,
    pub receiver_name: String,
}

#[derive(Debug, Serialize)]
pub struct AdminPanelResponse {
    pub family_members: Vec<MemberView>,
    pub secret_santa: Vec<PairView>,
    pub all_wishes: Vec<WishView>,
    pub wish_deadline: Option<String>,
}

pub async fn admin_panel(
    State(sstate): State<Arc<SharedState>>,
    _admin: AdminSession,
) -> Result<Json<AdminPanelResponse>, FWErr> {
    let db = &*sstate.database;

    let family_members: Vec<MemberView> = member::Entity::find()
        .order_by_asc(member::Column::Name)
        .all(db)
        .await?
        .iter()
        .map(MemberView::from)
        .collect();
    let names = member_names_by_id(db).await?;

    let mut secret_santa: Vec<PairView> = db
        .pairs()
        .await?
        .iter()
        .filter_map(|pair| {
            Some(PairView {
                giver_name: names.get(&pair.giver)?.clone(),
                receiver_name: names.get(&pair.receiver)?.clone(),
            })
        })
        .collect();
    secret_santa.sort_by(|a, b| a.giver_name.cmp(&b.giver_name));

    // Person ascending, newest wish first
    let mut all_wishes: Vec<WishView> = wish::Entity::find()
        .order_by_desc(wish::Column::Id)
        .all(db)
        .await?
        .iter()
        .map(|db_wish| {
            let person_name = names.get(&db_wish.member_id).cloned().unwrap_or_default();
            WishView::new(db_wish, &person_name)
        })
        .collect();
    all_wishes.sort_by(|a, b| a.person_name.cmp(&b.person_name));

    Ok(Json(AdminPanelResponse {
        family_members,
        secret_santa,
        all_wishes,
        wish_deadline: get_wish_deadline(db).await?,
    }))
}
