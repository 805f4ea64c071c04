//! Common test utilities for netrecon scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated record store + config directory, CLI helpers
//! - Fixtures: network record builders and entity documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
