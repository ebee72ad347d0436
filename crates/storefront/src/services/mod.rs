//! Business logic services.
//!
//! Services orchestrate repositories and own the typed errors for expected
//! failure conditions; repositories own the SQL.

pub mod auth;
pub mod checkout;
