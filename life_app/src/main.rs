// main.rs - Desktop front-end: one Controller, a tokio timer and an egui canvas

use anyhow::{Context, Result, bail};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use life::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use life::logging::{self, log_error, log_info};
use life::{CellLayout, Controller, TickOutcome, Ticker, presets};

mod ui;  // eframe::App impl and canvas painting

#[derive(Debug, Parser)]
#[command(name = "life", about = "Conway's Game of Life on a fixed grid")]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Distance in pixels between neighbouring cells
    #[arg(long, default_value_t = 10.0)]
    pitch: f32,

    /// Preset seeded at launch (diehard, bar, glider, cgg)
    #[arg(long)]
    preset: Option<String>,

    /// Start running as soon as the window opens
    #[arg(long)]
    autostart: bool,

    /// Silence console logging
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::set_enabled(!args.quiet);

    if args.interval_ms == 0 {
        bail!("--interval-ms must be greater than zero");
    }
    if !(args.pitch.is_finite() && args.pitch >= 2.0) {
        bail!("--pitch must be at least 2 pixels");
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start timer runtime")?;
    let mut app = LifeApp::new(&args, runtime)?;
    if let Some(name) = &args.preset {
        app.controller.seed_preset(name)
            .with_context(|| format!("cannot seed preset `{name}`"))?;
        if let Some(index) = presets::names().position(|n| n == name) {
            app.selected_preset = index;
        }
    }

    let (canvas_w, canvas_h) = app.layout.canvas_size(app.controller.grid());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_w.max(640.0) + 40.0, canvas_h + 180.0]),
        ..Default::default()
    };

    log_info(&format!("opening {}x{} grid", args.width, args.height));
    let autostart = args.autostart;
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| -> Box<dyn eframe::App> {
            if autostart { app.start(&cc.egui_ctx); }
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("window closed with error: {e}"))
}

pub struct LifeApp {
    pub controller: Controller,
    ticker: Ticker,
    _runtime: tokio::runtime::Runtime,  // declared after `ticker` so it outlives it

    pub width: usize,
    pub height: usize,
    pub interval_ms: u64,
    pub layout: CellLayout,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_preset: usize,
}

impl LifeApp {
    fn new(args: &Args, runtime: tokio::runtime::Runtime) -> Result<Self> {
        let controller = Controller::new(args.width, args.height)?;
        let ticker = Ticker::new(runtime.handle().clone());

        Ok(Self {
            controller,
            ticker,
            _runtime: runtime,
            width: args.width,
            height: args.height,
            interval_ms: args.interval_ms,
            layout: CellLayout { pitch: args.pitch, size: args.pitch - 1.0 },
            live_color: Color32::YELLOW,
            dead_color: Color32::GRAY,
            selected_preset: 0,
        })
    }

    /// Arms the timer at the current interval. Also used to apply a new
    /// interval while running.
    pub fn start(&mut self, ctx: &egui::Context) {
        if let Err(e) = self.controller.start(self.interval_ms) {
            log_error(&e.to_string());
            return;
        }
        if let Some(period) = self.controller.interval() {
            let ctx = ctx.clone();
            self.ticker.start(period, move || ctx.request_repaint());
        }
    }

    pub fn stop(&mut self) {
        self.controller.stop();
        self.ticker.cancel();
    }

    /// Empty grid of the configured size.
    pub fn clear(&mut self) {
        self.ticker.cancel();
        if let Err(e) = self.controller.reset(self.width, self.height) {
            log_error(&e.to_string());
        }
    }

    /// Fresh grid seeded with the selected preset.
    pub fn summon_selected(&mut self) {
        self.clear();
        let Some(name) = presets::names().nth(self.selected_preset) else { return };
        if let Err(e) = self.controller.seed_preset(name) {
            log_error(&e.to_string());
        }
    }

    /// Applies the ticks the timer delivered since the last frame.
    pub fn run_due_ticks(&mut self) {
        for _ in 0..self.ticker.take_due() {
            match self.controller.tick() {
                TickOutcome::Advanced(_) => {}
                TickOutcome::Settled | TickOutcome::Idle => break,
            }
        }
        if !self.controller.is_running() && self.ticker.is_active() {
            self.ticker.cancel();
        }
    }

    /// Clicks come from the canvas and are already inside the grid.
    pub fn toggle(&mut self, x: i32, y: i32) {
        if let Err(e) = self.controller.toggle_cell(x, y) {
            log_error(&e.to_string());
        }
    }
}
