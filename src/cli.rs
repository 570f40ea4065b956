use crate::config::load_config;
use crate::dump::write_layout_dump;
use crate::loader::Source;
use crate::pipeline::{RenderOutput, RenderPass};
use crate::render::write_output_svg;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use futures::executor::block_on;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ftsvg", version, about = "Render a pre-computed tree layout (JSON) to SVG")]
pub struct Args {
    /// Input tree document (.json) or '-' for stdin. Defaults to after.json
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme and render options)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Write bounds, canvas and per-node records as JSON
    #[arg(long = "dump")]
    pub dump: Option<PathBuf>,

    /// Warn about every pair of overlapping nodes
    #[arg(long = "check-overlaps")]
    pub check_overlaps: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let config = load_config(args.config.as_deref())?;
    let source = Source::from_arg(args.input.as_deref());

    let output = block_on(RenderPass::new(config.clone()).run(&source))?;

    if args.check_overlaps {
        report_overlaps(&output);
    }
    if let Some(path) = args.dump.as_deref() {
        write_layout_dump(path, &output)?;
    }

    match args.output_format {
        OutputFormat::Svg => write_output_svg(&output.svg, args.output.as_deref())?,
        OutputFormat::Png => {
            let path = ensure_output(args.output.as_deref(), "png")?;
            write_png(&output.svg, path, &config.render)?;
        }
    }
    Ok(())
}

fn init_logging() {
    // Bounds are logged at info level; keep them visible unless RUST_LOG says otherwise.
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn report_overlaps(output: &RenderOutput) {
    let pairs = output.tree.overlapping_pairs();
    for (a, b) in &pairs {
        log::warn!(
            "node {} overlaps node {}",
            a.id().unwrap_or_default(),
            b.id().unwrap_or_default()
        );
    }
    if pairs.is_empty() {
        log::info!("no overlapping nodes");
    }
}

fn ensure_output<'a>(output: Option<&'a Path>, ext: &str) -> Result<&'a Path> {
    output.ok_or_else(|| anyhow::anyhow!("Output path required for {} output", ext))
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path, render_cfg: &crate::config::RenderConfig) -> Result<()> {
    crate::render::write_output_png(svg, output, render_cfg)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path, _render_cfg: &crate::config::RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}
