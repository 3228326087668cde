pub mod member;
pub mod secret_santa;
pub mod setting;
pub mod wish;
