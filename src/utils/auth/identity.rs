use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use std::sync::Arc;

use crate::familywish_errors::FWErr;
use crate::sharedstate::SharedState;
use crate::utils::auth::jwt::{bearer_token, get_claims_from_jwt, TokenRole};

#[derive(Debug, Clone)]
pub enum IdentityErr {
    NoIdentity,
    NoMembersSelected,
    SelectionNoLongerValid,
}

/// The family member(s) a caller said they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberIdentity {
    pub member_ids: Vec<i64>,
}

impl MemberIdentity {
    pub fn includes(&self, member_id: i64) -> bool {
        self.member_ids.contains(&member_id)
    }
}

pub fn identity_from_headers(
    headers: &HeaderMap,
    sstate: &SharedState,
) -> Result<MemberIdentity, FWErr> {
    let Some(token) = bearer_token(headers) else {
        return Err(FWErr::IdentityError(IdentityErr::NoIdentity));
    };
    let claims = get_claims_from_jwt(token, &sstate.server_secret)?;
    if claims.role != TokenRole::Member {
        return Err(FWErr::IdentityError(IdentityErr::NoIdentity));
    }
    if claims.members.is_empty() {
        return Err(FWErr::IdentityError(IdentityErr::NoMembersSelected));
    }
    Ok(MemberIdentity {
        member_ids: claims.members,
    })
}

#[async_trait]
impl FromRequestParts<Arc<SharedState>> for MemberIdentity {
    type Rejection = FWErr;

    async fn from_request_parts(
        parts: &mut Parts,
        sstate: &Arc<SharedState>,
    ) -> Result<Self, Self::Rejection> {
        identity_from_headers(&parts.headers, sstate)
    }
}
