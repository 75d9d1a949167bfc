//! Scoring policy loading.

use anyhow::{Context, Result};
use credence::EnginePolicy;
use std::fs;
use std::path::Path;

/// Load a policy file, or fall back to the built-in policy.
pub(crate) fn load_policy(path: Option<&Path>) -> Result<EnginePolicy> {
    path.map_or_else(
        || Ok(EnginePolicy::default()),
        |p| {
            let text = fs::read_to_string(p)
                .with_context(|| format!("failed to read policy file {}", p.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse policy file {}", p.display()))
        },
    )
}
