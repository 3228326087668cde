use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AdminCredentials;
use crate::familywish_errors::FWErr;
use crate::sharedstate::SharedState;
use crate::utils::auth::hashing::verify_plain_string_for_hash;
use crate::utils::auth::jwt::{bearer_token, get_claims_from_jwt, TokenRole};

#[derive(Debug, Clone)]
pub enum AdminAuthErr {
    NoCredentials,
    InvalidCredentials,
    NotAnAdmin,
}

/// Proof that the request carried a valid admin token.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

pub fn validate_admin_credentials(
    username: &str,
    password: &str,
    admin: &AdminCredentials,
) -> Result<(), FWErr> {
    // Hash check runs even for a wrong username
    let password_valid = verify_plain_string_for_hash(password, &admin.password_hash);
    if username != admin.username || !password_valid {
        warn!(target: "auth", "Rejected admin login for '{}'", username);
        return Err(FWErr::AdminAuthError(AdminAuthErr::InvalidCredentials));
    }
    info!(target: "auth", "Admin '{}' logged in", username);
    Ok(())
}

pub fn admin_from_headers(headers: &HeaderMap, sstate: &SharedState) -> Result<AdminSession, FWErr> {
    let Some(token) = bearer_token(headers) else {
        return Err(FWErr::AdminAuthError(AdminAuthErr::NoCredentials));
    };
    let claims = get_claims_from_jwt(token, &sstate.server_secret)?;
    if claims.role != TokenRole::Admin || claims.sub != sstate.admin.username {
        return Err(FWErr::AdminAuthError(AdminAuthErr::NotAnAdmin));
    }
    Ok(AdminSession {
        username: claims.sub,
    })
}

#[async_trait]
impl FromRequestParts<Arc<SharedState>> for AdminSession {
    type Rejection = FWErr;

    async fn from_request_parts(
        parts: &mut Parts,
        sstate: &Arc<SharedState>,
    ) -> Result<Self, Self::Rejection> {
        admin_from_headers(&parts.headers, sstate)
    }
}
