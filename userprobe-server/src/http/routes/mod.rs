//! Route handlers organized by resource

pub mod container;
pub mod health;
pub mod user;
