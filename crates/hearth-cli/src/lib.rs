//! hearth CLI - build orchestrator for the hearth frontend suite.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
