// main.rs - Desktop front end for the Game of Life engine
// The grid is advanced by a background tokio task; the UI edits and draws it
// between generations through the same lock.

use std::path::PathBuf;

use eframe::egui;
use egui::Color32;
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use conway::{Grid, patterns};

mod editing;
mod resize_dialog;
mod runner;
mod settings;
mod simulation;
mod ui;
mod view;

use editing::Brush;
use resize_dialog::ResizeDialog;
use runner::Runner;
use settings::Settings;
use simulation::{SharedSimulation, Simulation, lock, shared};
use view::View;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings_path = Settings::default_path();
    let settings = Settings::load_or_default(&settings_path);
    let app = ConwayApp::new(settings, settings_path)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("window closed with an error: {err}"))
}

pub struct ConwayApp {
    sim: SharedSimulation,
    runner: Runner,
    view: View,
    brush: Brush,
    resize_dialog: Option<ResizeDialog>,
    settings: Settings,
    settings_path: PathBuf,
    pub selected_pattern: usize,
    pub live_color: Color32,
    pub dead_color: Color32,
    rng: StdRng,
}

impl ConwayApp {
    pub fn new(settings: Settings, settings_path: PathBuf) -> anyhow::Result<Self> {
        let mut grid = Grid::new(settings.grid_width, settings.grid_height);
        grid.set_wrap(settings.wrap);
        if settings.seed_glider {
            grid.seed_glider();
        }
        info!(
            "starting with a {}x{} grid (wrap: {})",
            grid.width(),
            grid.height(),
            grid.wrap()
        );

        let [lr, lg, lb] = settings.live_color;
        let [dr, dg, db] = settings.dead_color;

        Ok(Self {
            sim: shared(Simulation::new(grid)),
            runner: Runner::new(settings.speed, settings.stop_on_cycle)?,
            view: View::new(settings.zoom),
            brush: Brush::new(settings.painting_enabled),
            resize_dialog: None,
            settings_path,
            selected_pattern: 0,
            live_color: Color32::from_rgb(lr, lg, lb),
            dead_color: Color32::from_rgb(dr, dg, db),
            rng: StdRng::from_entropy(),
            settings,
        })
    }

    pub fn step(&mut self) {
        if self.runner.is_running() {
            return;
        }
        lock(&self.sim).step();
    }

    pub fn set_running(&mut self, run: bool, ctx: &egui::Context) {
        if run {
            let ctx = ctx.clone();
            self.runner
                .start(SharedSimulation::clone(&self.sim), move || ctx.request_repaint());
        } else {
            self.runner.stop();
        }
    }

    pub fn set_speed(&mut self, updates_per_second: u32) {
        self.runner.set_speed(updates_per_second);
        self.settings.speed = self.runner.speed();
    }

    pub fn set_wrap(&mut self, enabled: bool) {
        lock(&self.sim).grid_mut().set_wrap(enabled);
    }

    pub fn clear_grid(&mut self) {
        lock(&self.sim).clear();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            lock(&self.sim).apply_pattern(pattern);
        }
    }

    pub fn apply_random_pattern(&mut self) {
        lock(&self.sim).randomize(&mut self.rng, self.settings.random_density);
    }

    pub fn open_resize_dialog(&mut self) {
        let (w, h) = lock(&self.sim).grid().dimensions();
        self.resize_dialog = Some(ResizeDialog::new(w as i32, h as i32));
    }

    pub fn resize_grid(&mut self, width: i32, height: i32) {
        lock(&self.sim).resize(width, height);
    }

    fn save_settings(&mut self) {
        {
            let sim = lock(&self.sim);
            let (w, h) = sim.grid().dimensions();
            self.settings.grid_width = w as i32;
            self.settings.grid_height = h as i32;
            self.settings.wrap = sim.grid().wrap();
        }
        self.settings.zoom = self.view.zoom;
        self.settings.speed = self.runner.speed();
        self.settings.painting_enabled = self.brush.enabled();
        self.settings.live_color = [self.live_color.r(), self.live_color.g(), self.live_color.b()];
        self.settings.dead_color = [self.dead_color.r(), self.dead_color.g(), self.dead_color.b()];

        match self.settings.save_to_disk(&self.settings_path) {
            Ok(()) => info!("saved settings to {}", self.settings_path.display()),
            Err(err) => warn!("failed to save settings: {err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("conway_app_main_{}_{name}", std::process::id()))
            .join(settings::SETTINGS_FILE_NAME)
    }

    #[test]
    fn exit_stops_the_runner_and_saves_settings() {
        let path = temp_settings_path("exit");
        let mut app = ConwayApp::new(Settings::default(), path.clone()).unwrap();
        app.resize_grid(30, 20);
        app.set_wrap(true);
        app.set_speed(50);
        app.set_running(true, &egui::Context::default());
        assert!(app.runner.is_running());

        eframe::App::on_exit(&mut app, None);
        assert!(!app.runner.is_running());

        let saved = Settings::load_from_disk(&path).unwrap();
        assert_eq!((saved.grid_width, saved.grid_height), (30, 20));
        assert!(saved.wrap);
        assert_eq!(saved.speed, 50);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
