//! Credential handling for staff accounts.

pub mod password;
