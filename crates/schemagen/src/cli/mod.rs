//! CLI functionality for the schemagen tool
//!
//! This module contains all CLI-related functionality including:
//! - Generation
//! - Checking
//! - Type graph inspection
//! - Output formatting and logging setup

pub mod check;
pub mod generate;
pub mod inspect;
pub mod logging;
pub mod output;
