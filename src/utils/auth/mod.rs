pub mod admin;
pub mod hashing;
pub mod identity;
pub mod jwt;
