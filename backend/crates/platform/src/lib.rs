//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, NFKC-normalized input)
//! - Deterministic avatar derivation (Gravatar scheme)
//! - GitHub repository listing client

pub mod avatar;
pub mod github;
pub mod password;
