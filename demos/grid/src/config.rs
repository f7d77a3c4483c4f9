//! Host configuration: run parameters, grid shape and palette.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use nw_core::{Rgb, SOFT_GREEN, SimConfig};
use nw_graph::GridLayout;

/// Everything the host needs, loadable from JSON.  Missing fields fall back
/// to the defaults (15 × 15 grid, 120 agents, 20-tick hops).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sim:     SimConfig,
    pub grid:    GridLayout,
    pub palette: Vec<Rgb>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:     SimConfig::default(),
            grid:    GridLayout::default(),
            palette: SOFT_GREEN.to_vec(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
