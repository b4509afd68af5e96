//! CLI commands

pub mod visualise;
