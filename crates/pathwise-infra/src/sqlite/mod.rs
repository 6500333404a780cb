//! SQLite storage for Pathwise.
//!
//! - `pool`: split reader/writer pool in WAL mode, migrations on open
//! - `user`: `UserRepository` over the `users` table
//! - `legacy`: read-only access to the earlier `career_coach.db`

pub mod legacy;
pub mod pool;
pub mod user;
