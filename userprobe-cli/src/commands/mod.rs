//! Command implementations for the userprobe CLI

pub mod init;
pub mod serve;

pub use init::run_init;
pub use serve::run_serve;
