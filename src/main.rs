mod app;
mod content;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Portfolio content JSON; the bundled content is used when omitted
    #[arg(long)]
    content: Option<PathBuf>,

    /// Draw the particle field once instead of animating it
    #[arg(long, env = "FOLIO_REDUCED_MOTION")]
    reduced_motion: bool,

    /// Start with the particle background switched off
    #[arg(long)]
    no_particles: bool,

    /// Seed for reproducible particle layouts
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    #[arg(long, default_value_t = 860.0)]
    height: f32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings = app::Settings {
        content_path: args.content,
        reduced_motion: args.reduced_motion,
        particles: !args.no_particles,
        seed: args.seed,
    };
    log::info!("starting with {settings:?}");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "folio-field",
        options,
        Box::new(move |cc| Ok(Box::new(app::PortfolioApp::new(cc, settings)))),
    )
}
