use axum::extract::State;
use axum::Json;
use indexmap::IndexMap;
use sea_orm::entity::*;
use sea_orm::query::*;
use serde::Serialize;
use std::sync::Arc;

use crate::familywish_errors::FWErr;
use crate::handler::WishView;
use crate::orm::model::{member, wish};
use crate::secret_santa::AssignmentStore;
use crate::sharedstate::SharedState;
use crate::utils::auth::identity::{IdentityErr, MemberIdentity};
use crate::utils::settings::{get_wish_deadline, wishes_locked};

#[derive(Debug, Serialize)]
pub struct MyWishlistResponse {
    pub selected_members: Vec<String>,
    // giver name -> receiver name, selected members only
    pub assigned_to: IndexMap<String, String>,
    pub wishes_by_person: IndexMap<String, Vec<WishView>>,
    pub all_family_members: Vec<String>,
    pub wishes_locked: bool,
    pub wish_deadline: Option<String>,
}

/// Own wishes plus the wishes of each selected member's Secret Santa receiver.
pub async fn my_wishlist(
    State(sstate): State<Arc<SharedState>>,
    identity: MemberIdentity,
) -> Result<Json<MyWishlistResponse>, FWErr> {
    let db = &*sstate.database;

    // Validate selected members still exist
    let selected = member::Entity::find()
        .filter(member::Column::Id.is_in(identity.member_ids.clone()))
        .order_by_asc(member::Column::Name)
        .all(db)
        .await?;
    if selected.is_empty() {
        return Err(FWErr::IdentityError(IdentityErr::SelectionNoLongerValid));
    }

    let mut assigned_to = IndexMap::new();
    let mut people_to_show: Vec<member::Model> = selected.clone();
    for db_member in &selected {
        let Some(receiver_id) = db.receiver_for(db_member.id).await? else {
            continue;
        };
        let Some(db_receiver) = member::Entity::find_by_id(receiver_id).one(db).await? else {
            continue;
        };
        assigned_to.insert(db_member.name.clone(), db_receiver.name.clone());
        if !people_to_show.iter().any(|m| m.id == db_receiver.id) {
            people_to_show.push(db_receiver);
        }
    }

    let mut wishes_by_person = IndexMap::new();
    for person in &people_to_show {
        let db_wishes = wish::Entity::find()
            .filter(wish::Column::MemberId.eq(person.id))
            .order_by_desc(wish::Column::Id)
            .all(db)
            .await?;
        let views = db_wishes
            .iter()
            .map(|db_wish| WishView::new(db_wish, &person.name))
            .collect();
        wishes_by_person.insert(person.name.clone(), views);
    }

    let all_family_members = member::Entity::find()
        .order_by_asc(member::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|m| m.name)
        .collect();

    Ok(Json(MyWishlistResponse {
        selected_members: selected.into_iter().map(|m| m.name).collect(),
        assigned_to,
        wishes_by_person,
        all_family_members,
        wishes_locked: wishes_locked(db).await?,
        wish_deadline: get_wish_deadline(db).await?,
    }))
}
