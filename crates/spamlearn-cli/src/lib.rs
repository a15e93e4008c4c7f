//! Command implementations behind the `spamlearn` binary.
pub mod config;
pub mod evaluate;
pub mod search;
