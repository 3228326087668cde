pub mod admin;
pub mod public;

use axum::routing::{delete, get, post, put};
use axum::Router;
use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::familywish_errors::FWErr;
use crate::orm::model::{member, wish};
use crate::sharedstate::SharedState;

pub fn router(sstate: Arc<SharedState>) -> Router {
    Router::new()
        // Family
        .route("/members", get(public::list_members))
        .route("/who_are_you", post(public::who_are_you))
        .route("/my_wishlist", get(public::my_wishlist))
        .route("/wishes", post(public::add_wish))
        .route("/wishes/:wish_id", delete(public::delete_wish))
        .route("/wishes/:wish_id/reserve", post(public::reserve_wish))
        // Admin
        .route("/admin/login", post(admin::admin_login))
        .route("/admin", get(admin::admin_panel))
        .route("/admin/deadline", post(admin::set_deadline))
        .route("/admin/secret_santa", post(admin::run_secret_santa))
        .route("/admin/members", post(admin::add_family_member))
        .route(
            "/admin/members/:member_id",
            put(admin::edit_family_member).delete(admin::delete_family_member),
        )
        .with_state(sstate)
}

#[derive(Debug, Serialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberView {
    pub id: i64,
    pub name: String,
    pub team_name: Option<String>,
}

impl From<&member::Model> for MemberView {
    fn from(db_member: &member::Model) -> Self {
        Self {
            id: db_member.id,
            name: db_member.name.clone(),
            team_name: db_member.team_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishView {
    pub id: i64,
    pub person_name: String,
    pub wish_text: String,
    pub product_link: Option<String>,
    pub reserved: bool,
}

impl WishView {
    pub fn new(db_wish: &wish::Model, person_name: &str) -> Self {
        Self {
            id: db_wish.id,
            person_name: person_name.to_string(),
            wish_text: db_wish.wish_text.clone(),
            product_link: db_wish.product_link.clone(),
            reserved: db_wish.reserved,
        }
    }
}

pub(crate) async fn find_member_by_name(
    name: &str,
    db: &DatabaseConnection,
) -> Result<Option<member::Model>, FWErr> {
    Ok(member::Entity::find()
        .filter(member::Column::Name.eq(name))
        .one(db)
        .await?)
}

pub(crate) async fn member_names_by_id(
    db: &DatabaseConnection,
) -> Result<HashMap<i64, String>, FWErr> {
    let db_members = member::Entity::find().all(db).await?;
    Ok(db_members.into_iter().map(|m| (m.id, m.name)).collect())
}
