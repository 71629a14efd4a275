// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo settings: a TOML file, then command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use cloudviz_cloud::CloudConfig;
use serde::Deserialize;

/// Sample daily closes shipped with the demo.
pub(crate) const SAMPLE_CSV: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_close.csv");
/// Sample text shipped with the demo.
pub(crate) const SAMPLE_TEXT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_words.txt");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DemoConfig {
    /// Directory the SVG files and `index.html` are written to.
    pub(crate) out_dir: PathBuf,
    /// Daily-close CSV for the area chart.
    pub(crate) csv: PathBuf,
    /// Text for the word cloud.
    pub(crate) text: PathBuf,
    pub(crate) area: AreaConfig,
    pub(crate) cloud: CloudConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("cloudviz_out"),
            csv: PathBuf::from(SAMPLE_CSV),
            text: PathBuf::from(SAMPLE_TEXT),
            area: AreaConfig::default(),
            cloud: CloudConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AreaConfig {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            width: 928.0,
            height: 500.0,
        }
    }
}

impl DemoConfig {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
