use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use tracing::warn;

use crate::familywish_errors::FWErr;

// String hashing (admin password)
pub fn plain_string_to_hash(plain_password: &str) -> Result<String, FWErr> {
    let config = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);
    let hash = config
        .hash_password(plain_password.as_bytes(), &salt)
        .map_err(|_| FWErr::HashingError)?;
    Ok(hash.to_string())
}

// String validation against a PHC hash string
pub fn verify_plain_string_for_hash(password: &str, hashdata: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hashdata) else {
        warn!(target: "auth", "Stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
