use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use sketchpad::host::Host;
use sketchpad::input::SurfaceOrigin;
use sketchpad::script::Script;
use sketchpad::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Freehand drawing canvas with PNG export")]
struct Cli {
    /// Event script to replay (TOML, or JSON with a .json extension)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Canvas width in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Viewport position of the canvas' top-left corner, used to map touch coordinates
    #[arg(long, value_name = "X,Y", value_parser = parse_origin, default_value = "0,0")]
    origin: SurfaceOrigin,

    /// Directory drawing.png is written to (overrides config)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Print the final export as a data URL on stdout
    #[arg(long, action = ArgAction::SetTrue)]
    data_url: bool,

    /// Write the default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_origin(value: &str) -> Result<SurfaceOrigin, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid coordinate '{part}': {err}"))
    };
    Ok(SurfaceOrigin::new(parse(x)?, parse(y)?))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script.as_deref() else {
        println!("sketchpad: Freehand drawing canvas with PNG export");
        println!();
        println!("Usage:");
        println!("  sketchpad --script events.toml   Replay input events and export drawing.png");
        println!("  sketchpad --init-config          Write ~/.config/sketchpad/config.toml");
        println!("  sketchpad --help                 Show help");
        println!();
        println!("Script events:");
        println!("  pointer-down/move/up/leave  {{ x, y }}   surface-local mouse position");
        println!("  touch-start/move/end/cancel {{ touches }} viewport touch points [[x, y], ...]");
        println!("  set-color {{ value = \"#RRGGBB\" }}, set-size {{ value = 1..10 }}");
        println!("  clear, export, submit");
        return Ok(());
    };

    let config = Config::load()?;
    let width = cli.width.unwrap_or(config.canvas.width);
    let height = cli.height.unwrap_or(config.canvas.height);
    let export_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export_directory());

    let script = Script::load(script_path)?;

    let mut host: Host = Host::mount(width, height, config.tool_state(), cli.origin, export_dir)
        .with_context(|| format!("Failed to create {width}x{height} canvas"))?;

    let mut summary = host
        .replay(&script)
        .with_context(|| format!("Failed to replay {}", script_path.display()))?;

    if summary.last_export.is_none() {
        let (image, path) = host.export_to_disk().context("Failed to export drawing")?;
        summary.saved.push(path);
        summary.last_export = Some(image);
    }

    for path in &summary.saved {
        log::info!("Drawing saved: {}", path.display());
    }
    if let Some(path) = summary.saved.last() {
        eprintln!("Saved {}", path.display());
    }

    if cli.data_url
        && let Some(image) = &summary.last_export
    {
        println!("{}", image.to_data_url());
    }

    Ok(())
}
