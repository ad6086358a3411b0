// main.rs - Conway's Game of Life window
// The simulation ticks on a tokio interval; everything else happens on the UI thread.

use anyhow::{Context, anyhow};
use clap::Parser;
use conway::{DEFAULT_COLS, DEFAULT_ROWS, Simulation};
use eframe::egui;
use tokio::runtime::{Handle, Runtime};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cell_view; // Single cell widget
mod cli;       // Command line
mod settings;  // Settings file
mod timer;     // Tokio tick source
mod ui;        // Grid view and control panel

use cell_view::Palette;
use cli::Cli;
use settings::Settings;
use timer::TokioTimer;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    let runtime = Runtime::new().context("starting tokio runtime")?;

    let width = settings.cell_size * DEFAULT_COLS as f32 + 60.0;
    let height = settings.cell_size * DEFAULT_ROWS as f32 + 220.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width.max(640.0), height]),
        ..Default::default()
    };

    info!(?settings, "starting");
    // The app, and with it the timer task, is dropped inside run_native while the runtime lives on.
    let handle = runtime.handle().clone();
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeApp::new(&cc.egui_ctx, handle, &settings))),
    )
    .map_err(|err| anyhow!("window closed with error: {err}"))
}

pub struct LifeApp {
    pub simulation: Simulation<TokioTimer>,
    pub palette: Palette,
    pub cell_size: f32,
    pub speed_input: u64,
}

impl LifeApp {
    pub fn new(ctx: &egui::Context, runtime: Handle, settings: &Settings) -> Self {
        let timer = TokioTimer::new(runtime).with_repaint(ctx.clone());

        let mut simulation = Simulation::new(timer);
        simulation.set_speed(settings.speed_ms);
        if let Some(scene) = settings.initial_scene {
            simulation.load_scene(scene);
        }

        let ctx = ctx.clone();
        simulation.subscribe(move |_| ctx.request_repaint());

        Self {
            speed_input: simulation.state().speed.as_millis() as u64,
            simulation,
            palette: Palette {
                live: settings.live_color(),
                dead: settings.dead_color(),
                border: egui::Color32::from_gray(60),
            },
            cell_size: settings.cell_size,
        }
    }
}
