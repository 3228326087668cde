use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::familywish_errors::FWErr;
use crate::handler::Notice;
use crate::orm::WISH_DEADLINE_KEY;
use crate::sharedstate::SharedState;
use crate::utils::auth::admin::AdminSession;
use crate::utils::data_validation::deadline::deadline_validate;
use crate::utils::settings::set_setting;

#[derive(Debug, Deserialize)]
pub struct SetDeadlineRequest {
    #[serde(default)]
    pub wish_deadline: Option<String>,
}

pub async fn set_deadline(
    State(sstate): State<Arc<SharedState>>,
    admin: AdminSession,
    Json(request): Json<SetDeadlineRequest>,
) -> Result<Json<Notice>, FWErr> {
    let raw = request.wish_deadline.unwrap_or_default();
    let raw = raw.trim();

    if raw.is_empty() {
        set_setting(WISH_DEADLINE_KEY, "", &sstate.database).await?;
        info!(target: "http", "Admin {} cleared the wish deadline", admin.username);
        return Ok(Json(Notice::new(
            "Wish deadline cleared, wishes can be added at any time.",
        )));
    }

    let deadline = deadline_validate(raw)?;
    let deadline = deadline.format("%Y-%m-%d").to_string();
    set_setting(WISH_DEADLINE_KEY, &deadline, &sstate.database).await?;
    info!(target: "http", "Admin {} set the wish deadline to {}", admin.username, deadline);
    Ok(Json(Notice::new(format!("Wish deadline set to {}.", deadline))))
}
