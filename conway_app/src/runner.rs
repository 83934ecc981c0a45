// runner.rs - Background task that advances the simulation at a fixed rate

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use log::{info, warn};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::settings::{MAX_SPEED, MIN_SPEED};
use crate::simulation::{SharedSimulation, lock};

/// Delay between two generations at `speed` generations per second.
pub fn tick_interval(speed: u32) -> Duration {
    Duration::from_millis(1000 / speed.clamp(MIN_SPEED, MAX_SPEED) as u64)
}

/// Advances a [`SharedSimulation`] on a tokio task until stopped.
///
/// Each tick holds the simulation lock for exactly one sweep. The task only
/// yields while sleeping between sweeps, so stopping never cuts a generation
/// in half.
pub struct Runner {
    runtime: Runtime,
    task: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
    speed: Arc<AtomicU32>,
    stop_on_cycle: Arc<AtomicBool>,
}

impl Runner {
    pub fn new(speed: u32, stop_on_cycle: bool) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("conway-runner")
            .enable_time()
            .build()?;

        Ok(Self {
            runtime,
            task: None,
            running: Arc::new(AtomicBool::new(false)),
            speed: Arc::new(AtomicU32::new(speed.clamp(MIN_SPEED, MAX_SPEED))),
            stop_on_cycle: Arc::new(AtomicBool::new(stop_on_cycle)),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn speed(&self) -> u32 {
        self.speed.load(Ordering::Relaxed)
    }

    /// Takes effect from the next tick.
    pub fn set_speed(&self, updates_per_second: u32) {
        self.speed
            .store(updates_per_second.clamp(MIN_SPEED, MAX_SPEED), Ordering::Relaxed);
    }

    pub fn set_stop_on_cycle(&self, enabled: bool) {
        self.stop_on_cycle.store(enabled, Ordering::Relaxed);
    }

    /// Starts advancing `sim`. `on_tick` runs after every generation, outside
    /// the lock (typically a repaint request). Does nothing if already running.
    pub fn start<F>(&mut self, sim: SharedSimulation, on_tick: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        if self.is_running() {
            return;
        }
        // A previous run may have stopped itself on a cycle.
        self.join();

        self.running.store(true, Ordering::Release);
        let running = Arc::clone(&self.running);
        let speed = Arc::clone(&self.speed);
        let stop_on_cycle = Arc::clone(&self.stop_on_cycle);

        info!("runner started at {} gen/s", self.speed());
        self.task = Some(self.runtime.spawn(async move {
            while running.load(Ordering::Acquire) {
                let cycled = lock(&sim).step();
                on_tick();

                if cycled && stop_on_cycle.load(Ordering::Relaxed) {
                    info!("generation repeats, runner pausing");
                    running.store(false, Ordering::Release);
                    break;
                }

                tokio::time::sleep(tick_interval(speed.load(Ordering::Relaxed))).await;
            }
        }));
    }

    /// Stops advancing and waits for the task to finish its current tick.
    pub fn stop(&mut self) {
        if self.running.swap(false, Ordering::AcqRel) {
            info!("runner stopped");
        }
        if let Some(task) = &self.task {
            task.abort();
        }
        self.join();
    }

    fn join(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        if let Err(err) = self.runtime.block_on(task) {
            if !err.is_cancelled() {
                warn!("runner task failed: {err}");
            }
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{Simulation, shared};
    use conway::{Cell, Grid};
    use std::sync::atomic::AtomicU64;
    use std::thread;
    use std::time::Instant;

    fn glider_sim() -> SharedSimulation {
        let mut grid = Grid::new(40, 40);
        grid.seed_glider();
        shared(Simulation::new(grid))
    }

    #[test]
    fn interval_follows_speed() {
        assert_eq!(tick_interval(1), Duration::from_millis(1000));
        assert_eq!(tick_interval(4), Duration::from_millis(250));
        assert_eq!(tick_interval(0), Duration::from_millis(1000));
        assert_eq!(tick_interval(1000), Duration::from_millis(10));
    }

    #[test]
    fn runs_until_stopped() {
        let sim = glider_sim();
        let ticks = Arc::new(AtomicU64::new(0));
        let mut runner = Runner::new(MAX_SPEED, false).unwrap();

        let counter = Arc::clone(&ticks);
        runner.start(Arc::clone(&sim), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(runner.is_running());

        thread::sleep(Duration::from_millis(250));
        runner.stop();
        assert!(!runner.is_running());

        let generation = lock(&sim).generation();
        assert!(generation >= 2, "only {generation} generations");
        assert_eq!(ticks.load(Ordering::SeqCst), generation);

        thread::sleep(Duration::from_millis(50));
        assert_eq!(lock(&sim).generation(), generation);
    }

    #[test]
    fn pauses_itself_on_a_cycle() {
        let sim = shared(Simulation::new(Grid::new(6, 6)));
        let mut runner = Runner::new(MAX_SPEED, true).unwrap();
        runner.start(Arc::clone(&sim), || {});

        let deadline = Instant::now() + Duration::from_secs(5);
        while runner.is_running() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!runner.is_running());
        // An empty grid repeats on the second generation.
        assert_eq!(lock(&sim).generation(), 2);
    }

    #[test]
    fn can_restart_after_stopping() {
        let sim = glider_sim();
        let mut runner = Runner::new(MAX_SPEED, false).unwrap();

        runner.start(Arc::clone(&sim), || {});
        thread::sleep(Duration::from_millis(40));
        runner.stop();
        let first = lock(&sim).generation();

        runner.start(Arc::clone(&sim), || {});
        thread::sleep(Duration::from_millis(60));
        runner.stop();
        assert!(lock(&sim).generation() > first);
    }

    #[test]
    fn edits_between_ticks_are_seen_by_the_runner() {
        let sim = shared(Simulation::new(Grid::new(5, 5)));
        let mut runner = Runner::new(1, false).unwrap();

        runner.start(Arc::clone(&sim), || {});
        // The first tick runs immediately; the next one is a second away.
        thread::sleep(Duration::from_millis(100));
        {
            let mut sim = lock(&sim);
            assert_eq!(sim.generation(), 1);
            for x in 1..4 {
                sim.grid_mut().set_cell(x, 2, Cell::Alive);
            }
        }

        let deadline = Instant::now() + Duration::from_secs(5);
        while lock(&sim).generation() < 2 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        runner.stop();

        let sim = lock(&sim);
        assert_eq!(sim.generation(), 2);
        // The horizontal blinker painted between ticks is now vertical.
        let grid = sim.grid();
        assert_eq!(grid.population(), 3);
        for y in 1..4 {
            assert_eq!(grid.get_cell(2, y), Cell::Alive, "(2, {y})");
        }
    }

    #[test]
    fn speed_is_clamped() {
        let runner = Runner::new(0, false).unwrap();
        assert_eq!(runner.speed(), MIN_SPEED);
        runner.set_speed(10_000);
        assert_eq!(runner.speed(), MAX_SPEED);
    }
}
