//! Cryptographic operations for Pathwise.
//!
//! - `password`: argon2id password hashing with legacy SHA-256 verification

pub mod password;
