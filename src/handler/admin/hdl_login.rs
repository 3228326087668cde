use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::familywish_errors::FWErr;
use crate::sharedstate::SharedState;
use crate::utils::auth::admin::validate_admin_credentials;
use crate::utils::auth::jwt::get_jwt_for_admin;

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
}

pub async fn admin_login(
    State(sstate): State<Arc<SharedState>>,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, FWErr> {
    validate_admin_credentials(&request.username, &request.password, &sstate.admin)?;
    let token = get_jwt_for_admin(
        &sstate.admin.username,
        &sstate.server_secret,
        sstate.token_ttl_hours,
    )?;
    Ok(Json(AdminLoginResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sharedstate::testing::{test_state, TEST_ADMIN_PASSWORD};
    use crate::utils::auth::jwt::{get_claims_from_jwt, TokenRole};

    #[tokio::test]
    async fn issues_admin_token() {
        let sstate = test_state().await;
        let request = AdminLoginRequest {
            username: "admin".to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        };
        let Json(response) = admin_login(State(sstate.clone()), Json(request)).await.unwrap();
        let claims = get_claims_from_jwt(&response.token, &sstate.server_secret).unwrap();
        assert_eq!(claims.role, TokenRole::Admin);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let sstate = test_state().await;
        let request = AdminLoginRequest {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };
        let result = admin_login(State(sstate), Json(request)).await;
        assert!(matches!(result, Err(FWErr::AdminAuthError(_))));
    }
}
