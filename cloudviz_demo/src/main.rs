// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the blank chart, the daily-close area chart and a word cloud to SVG files, plus an
//! `index.html` showing all three.
//!
//! ```text
//! cloudviz_demo [--config FILE] [--csv FILE] [--text FILE] [--out DIR] [--seed N]
//! ```
//!
//! Logging follows `RUST_LOG` (default `info`).

mod config;
mod svg;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use cloudviz_charts::{AreaChartSpec, BlankChartSpec, ChartLayout, Size};
use cloudviz_cloud::{CloudView, size_words_with, tokenize};
use cloudviz_core::{Mark, MarkId, Scene};
use cloudviz_text::HeuristicTextMeasurer;
use kurbo::Rect;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

#[derive(Debug, Parser)]
#[command(version, about = "Render cloudviz charts and a word cloud to SVG")]
struct Args {
    /// TOML settings file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Daily-close CSV (`date`, `close` columns) for the area chart.
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
    /// Text file for the word cloud.
    #[arg(long, value_name = "FILE")]
    text: Option<PathBuf>,
    /// Output directory.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Word-cloud layout seed.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

impl Args {
    fn resolve(self) -> anyhow::Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        if let Some(csv) = self.csv {
            config.csv = csv;
        }
        if let Some(text) = self.text {
            config.text = text;
        }
        if let Some(out) = self.out {
            config.out_dir = out;
        }
        if let Some(seed) = self.seed {
            config.cloud.seed = seed;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().resolve()?;
    let written = run(&config).await?;
    for path in &written {
        info!(path = %path.display(), "wrote");
    }
    Ok(())
}

/// A rendered chart ready to be written out.
#[derive(Debug)]
struct Figure {
    name: &'static str,
    svg: String,
}

impl Figure {
    fn new(name: &'static str, marks: Vec<Mark>, view: Rect) -> Self {
        let mut scene = Scene::new();
        scene.replace(marks);
        Self::from_scene(name, &scene, view)
    }

    fn from_scene(name: &'static str, scene: &Scene, view: Rect) -> Self {
        Self {
            name,
            svg: svg::scene_to_svg(scene, view),
        }
    }
}

/// Renders every figure into `config.out_dir` and returns the written paths.
async fn run(config: &DemoConfig) -> anyhow::Result<Vec<PathBuf>> {
    let figures = [
        blank_chart(),
        area_chart(config).await,
        word_cloud(config).await?,
    ];

    tokio::fs::create_dir_all(&config.out_dir)
        .await
        .with_context(|| format!("creating {}", config.out_dir.display()))?;

    let mut written = Vec::new();
    for figure in &figures {
        let path = config.out_dir.join(format!("{}.svg", figure.name));
        write(&path, &figure.svg).await?;
        written.push(path);
    }
    let index = config.out_dir.join("index.html");
    write(&index, &index_html(&figures)).await?;
    written.push(index);
    Ok(written)
}

async fn write(path: &Path, contents: &str) -> anyhow::Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))
}

fn blank_chart() -> Figure {
    let chart = BlankChartSpec::default();
    let layout = chart.layout();
    Figure::new("blank_chart", chart.marks_in(&layout), layout.view)
}

async fn area_chart(config: &DemoConfig) -> Figure {
    let chart = match cloudviz_data::load_path_async(&config.csv).await {
        Ok(series) => {
            info!(rows = series.len(), path = %config.csv.display(), "loaded daily closes");
            AreaChartSpec::new(series.xy())
        }
        Err(err) => {
            warn!(%err, path = %config.csv.display(), "could not load daily closes");
            AreaChartSpec::failed(format!("Could not load {}: {err}", config.csv.display()))
        }
    }
    .with_size(Size::new(config.area.width, config.area.height));

    let layout: ChartLayout = chart.layout();
    let needed = chart.y_axis(&layout).measure(&HeuristicTextMeasurer);
    if needed > layout.margins.left {
        warn!(
            needed,
            margin = layout.margins.left,
            "y-axis labels are wider than the left margin"
        );
    }
    Figure::new("area_chart", chart.marks_in(&layout), layout.view)
}

async fn word_cloud(config: &DemoConfig) -> anyhow::Result<Figure> {
    let text = tokio::fs::read_to_string(&config.text)
        .await
        .with_context(|| format!("reading {}", config.text.display()))?;
    let cloud = &config.cloud;
    let tokens = tokenize(&text, &cloud.tokenize);
    let words = size_words_with(&tokens, &cloud.size);
    info!(words = words.len(), "tokenized word-cloud text");

    let runner = cloud.runner();
    let mut view = CloudView::new(cloud.renderer(MarkId(0))?).with_tracker(runner.tracker());
    let done = runner.request(&words, cloud.bounds())?.wait().await?;
    if !done.output.skipped.is_empty() {
        warn!(
            skipped = done.output.skipped.len(),
            "some words found no room in the cloud"
        );
    }
    view.apply(done)?;

    let bounds = cloud.bounds();
    Ok(Figure::from_scene(
        "word_cloud",
        view.scene(),
        Rect::new(0.0, 0.0, bounds.width, bounds.height),
    ))
}

fn index_html(figures: &[Figure]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>cloudviz</title></head>\n<body>\n",
    );
    for (i, figure) in figures.iter().enumerate() {
        if i > 0 {
            out.push_str("<br />\n");
        }
        out.push_str(&figure.svg);
    }
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> DemoConfig {
        let mut config = DemoConfig::default();
        config.out_dir = dir.join("out");
        config.cloud.seed = 1;
        config
    }

    #[tokio::test]
    async fn writes_every_figure_and_an_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let written = run(&config).await.unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            ["blank_chart.svg", "area_chart.svg", "word_cloud.svg", "index.html"]
        );

        let area = std::fs::read_to_string(&written[1]).unwrap();
        assert!(area.contains("Daily close"), "caption missing");
        assert!(area.contains("fill=\"#4682b4\""), "steelblue area missing");
        let index = std::fs::read_to_string(&written[3]).unwrap();
        assert_eq!(index.matches("<svg").count(), 3);
    }

    #[tokio::test]
    async fn unreadable_csv_renders_a_status_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.csv = dir.path().join("missing.csv");
        let figure = area_chart(&config).await;
        assert!(figure.svg.contains("Could not load"), "{}", figure.svg);
        assert!(!figure.svg.contains("<path"), "{}", figure.svg);
    }

    #[test]
    fn command_line_overrides_defaults() {
        let args = Args::parse_from([
            "cloudviz_demo",
            "--csv",
            "prices.csv",
            "--out",
            "site",
            "--seed",
            "42",
        ]);
        let config = args.resolve().unwrap();
        assert_eq!(config.csv, PathBuf::from("prices.csv"));
        assert_eq!(config.out_dir, PathBuf::from("site"));
        assert_eq!(config.cloud.seed, 42);
        assert_eq!(config.text, PathBuf::from(config::SAMPLE_TEXT));
    }
}
