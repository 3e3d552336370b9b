//! Pure helper functions shared across layers.

pub mod basic_auth;
pub mod logical_id;
