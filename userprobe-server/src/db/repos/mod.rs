//! Repository implementations for database access
//!
//! Repositories borrow the shared pool; every call acquires a connection
//! for one statement and returns it to the pool on all exit paths.

pub mod users;

pub use users::UserRepo;
