//! CLI library for testing purposes

pub mod config;
pub mod report;

pub use config::{duplicate_policy, load_rules, parse_rules};
