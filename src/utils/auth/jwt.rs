use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::familywish_errors::FWErr;

#[derive(Debug, Clone)]
pub enum JWTErr {
    JWTDecodeError,
    JWTEncodeError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenRole {
    Admin,
    Member,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: TokenRole,
    #[serde(default)]
    pub members: Vec<i64>,
    pub exp: usize,
}

fn expiry_after_hours(ttl_hours: i64) -> usize {
    let exp = chrono::Utc::now() + chrono::Duration::hours(ttl_hours);
    exp.timestamp().max(0) as usize
}

fn sign(claims: &Claims, secret: &str) -> Result<String, FWErr> {
    let header = Header::new(Algorithm::HS256);
    encode(&header, claims, &EncodingKey::from_secret(secret.as_ref()))
        .map_err(|_| FWErr::JWTError(JWTErr::JWTEncodeError))
}

pub fn get_jwt_for_admin(username: &str, secret: &str, ttl_hours: i64) -> Result<String, FWErr> {
    let claims = Claims {
        sub: username.to_string(),
        role: TokenRole::Admin,
        members: Vec::new(),
        exp: expiry_after_hours(ttl_hours),
    };
    sign(&claims, secret)
}

pub fn get_jwt_for_members(
    member_ids: &[i64],
    secret: &str,
    ttl_hours: i64,
) -> Result<String, FWErr> {
    let claims = Claims {
        sub: "family".to_string(),
        role: TokenRole::Member,
        members: member_ids.to_vec(),
        exp: expiry_after_hours(ttl_hours),
    };
    sign(&claims, secret)
}

pub fn get_claims_from_jwt(token: &str, secret: &str) -> Result<Claims, FWErr> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|decoded| decoded.claims)
    .map_err(|_| FWErr::JWTError(JWTErr::JWTDecodeError))
}

// "Authorization: Bearer <token>"
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
