//! CLI subcommand modules.
//!
//! This module contains the implementations for all credence CLI subcommands.

pub(crate) mod bands;
pub(crate) mod factors;
pub(crate) mod score;
