use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sea_orm::entity::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::familywish_errors::FWErr;
use crate::handler::{find_member_by_name, WishView};
use crate::orm::model::wish;
use crate::sharedstate::SharedState;
use crate::utils::auth::identity::MemberIdentity;
use crate::utils::data_validation::member_name::member_name_normalize;
use crate::utils::data_validation::product_link::{product_link_normalize, product_link_validate};
use crate::utils::data_validation::wish_text::wish_text_validate;
use crate::utils::settings::wishes_locked;

#[derive(Debug, Deserialize)]
pub struct AddWishRequest {
    pub person_name: String,
    pub wish_text: String,
    #[serde(default)]
    pub product_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddWishResponse {
    pub wish: WishView,
    // Set when wishing on behalf of somebody else
    pub message: Option<String>,
}

pub async fn add_wish(
    State(sstate): State<Arc<SharedState>>,
    identity: Option<MemberIdentity>,
    Json(request): Json<AddWishRequest>,
) -> Result<(StatusCode, Json<AddWishResponse>), FWErr> {
    let db = &*sstate.database;

    // Block new wishes after the deadline
    if wishes_locked(db).await? {
        return Err(FWErr::WishesLocked);
    }

    let person_name = member_name_normalize(&request.person_name);
    let wish_text = request.wish_text.trim().to_string();
    wish_text_validate(&wish_text)?;
    let product_link = product_link_normalize(request.product_link.as_deref());
    product_link_validate(product_link.as_deref())?;

    // Only members of the family pool can have wishes
    let Some(db_member) = find_member_by_name(&person_name, db).await? else {
        return Err(FWErr::MemberNotFound(person_name));
    };

    let db_wish = wish::ActiveModel {
        member_id: Set(db_member.id),
        wish_text: Set(wish_text),
        product_link: Set(product_link),
        reserved: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!(target: "http", "Wish {} added for {}", db_wish.id, db_member.name);

    let on_behalf = match &identity {
        Some(identity) => !identity.includes(db_member.id),
        None => false,
    };
    let message = on_behalf.then(|| format!("Wish created for {}!", db_member.name));

    Ok((
        StatusCode::CREATED,
        Json(AddWishResponse {
            wish: WishView::new(&db_wish, &db_member.name),
            message,
        }),
    ))
}
