//! CLI infrastructure for the oxo binary
//!
//! This module provides the command-line interface for playing against
//! the strategist, analyzing positions, and evaluating the strategist
//! against a random baseline.

pub mod commands;
pub mod output;
