//! Application layer: composition logic over the domain contracts.

pub mod services;
