#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use life_viewer::{App, Config, Preset};

/// Interactive viewer for Life-like cellular automata on a bounded grid.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of cell columns.
    #[arg(long, default_value_t = Config::WORLD_X)]
    width: usize,

    /// Number of cell rows.
    #[arg(long, default_value_t = Config::WORLD_Y)]
    height: usize,

    /// Birth/survival rule, e.g. B3/S23 or B36/S23.
    #[arg(long, default_value = "B3/S23")]
    rule: String,

    /// Hundredths of a second between generations while running (0 = every frame).
    #[arg(long, default_value_t = Config::SPEED)]
    speed: u32,

    /// Preset placed in the centre of generation 0, e.g. glider or gosper-glider-gun.
    #[arg(long, conflicts_with = "random")]
    pattern: Option<String>,

    /// Fill generation 0 randomly with this seed.
    #[arg(long, value_name = "SEED")]
    random: Option<u64>,

    /// Share of live cells for --random.
    #[arg(long, default_value_t = 0.3)]
    fill_rate: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config {
        width: args.width,
        height: args.height,
        rule: args.rule,
        speed: args.speed,
    };
    // configuration errors end the process before any window opens
    let mut world = config.build().context("invalid configuration")?;
    if let Some(name) = &args.pattern {
        let preset = name.parse::<Preset>()?;
        world
            .load_preset(preset)
            .with_context(|| format!("{} does not fit the grid", preset.name()))?;
    }
    if let Some(seed) = args.random {
        world.randomize(Some(seed), args.fill_rate);
    }

    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Life Viewer | INITIALISING...")
            .with_inner_size(vec2(1000., 700.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Life Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(world)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
