// simulation.rs - Grid plus generation bookkeeping, shared with the runner

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use conway::{CycleDetector, Grid, Pattern};
use log::debug;
use rand::Rng;

/// Shared between the UI thread and the background runner. Whoever holds the
/// lock owns the grid for a whole sweep or a whole edit.
pub type SharedSimulation = Arc<Mutex<Simulation>>;

pub fn shared(sim: Simulation) -> SharedSimulation {
    Arc::new(Mutex::new(sim))
}

/// Locks the simulation. A panic on another thread never leaves the grid
/// half swept (the sweep publishes by swapping buffers), so a poisoned lock
/// is still safe to use.
pub fn lock(sim: &Mutex<Simulation>) -> MutexGuard<'_, Simulation> {
    sim.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    history: CycleDetector,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
            history: CycleDetector::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances one generation. Returns true once the grid starts repeating.
    pub fn step(&mut self) -> bool {
        self.grid.advance_generation();
        self.generation += 1;
        self.history.observe(self.grid.fingerprint())
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.restart();
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.grid.resize(width, height);
        self.restart();
    }

    /// Clears the grid and stamps `pattern` in the middle.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        let (w, h) = self.grid.dimensions();
        let (pw, ph) = pattern.bounds();
        let origin_x = ((w as i32 - pw) / 2).max(0);
        let origin_y = ((h as i32 - ph) / 2).max(0);

        self.grid.clear();
        self.grid.stamp(pattern, origin_x, origin_y);
        self.restart();
        debug!("applied {} at ({origin_x}, {origin_y})", pattern.name);
    }

    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        self.grid.fill_random(rng, density);
        self.restart();
    }

    fn restart(&mut self) {
        self.generation = 0;
        self.history.reset();
    }
}
