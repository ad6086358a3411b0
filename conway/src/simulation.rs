// simulation.rs - Run/stop state machine driving the step function

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::grid::Grid;
use crate::rules;
use crate::scenes::SceneId;

pub const DEFAULT_SPEED: Duration = Duration::from_millis(1000);

/// Whatever fires ticks. `start` arms a repeating timer, `cancel` disarms it.
/// The owner of the timer feeds each firing back through [`Simulation::tick`].
pub trait Timer {
    fn start(&mut self, period: Duration);
    fn cancel(&mut self);
}

/// Immutable snapshot handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    pub grid: Grid,
    pub running: bool,
    pub speed: Duration,
    pub generation: u64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            running: false,
            speed: DEFAULT_SPEED,
            generation: 0,
        }
    }
}

type Observer = Box<dyn FnMut(&SimulationState)>;

pub struct Simulation<T: Timer> {
    state: SimulationState,
    timer: T,
    observers: Vec<Observer>,
}

impl<T: Timer> Simulation<T> {
    pub fn new(timer: T) -> Self {
        Self::with_grid(Grid::default(), timer)
    }

    pub fn with_grid(grid: Grid, timer: T) -> Self {
        Self {
            state: SimulationState { grid, ..SimulationState::default() },
            timer,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Called with the new snapshot after every change, in subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut(&SimulationState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// STOPPED -> RUNNING. Ignored while already running so only one timer ever exists.
    pub fn start(&mut self) -> bool {
        if self.state.running {
            debug!("start ignored: already running");
            return false;
        }
        self.timer.cancel();
        self.timer.start(self.state.speed);
        info!(speed_ms = self.state.speed.as_millis() as u64, "life begins");
        self.replace(SimulationState { running: true, ..self.state.clone() });
        true
    }

    /// RUNNING -> STOPPED.
    pub fn stop(&mut self) -> bool {
        if !self.state.running {
            debug!("stop ignored: not running");
            return false;
        }
        self.timer.cancel();
        info!(generation = self.state.generation, "evolution stopped");
        self.replace(SimulationState { running: false, ..self.state.clone() });
        true
    }

    /// One timer firing. Ticks that arrive after `stop` are dropped.
    pub fn tick(&mut self) -> bool {
        if !self.state.running {
            debug!("tick ignored: not running");
            return false;
        }
        let grid = rules::step(&self.state.grid);
        let generation = self.state.generation + 1;
        debug!(generation, population = grid.population(), "tick");
        self.replace(SimulationState { grid, generation, ..self.state.clone() });
        true
    }

    /// Flips one cell. Panics if (row, col) is outside the grid.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if self.state.running {
            debug!(row, col, "toggle ignored: running");
            return false;
        }
        let mut grid = self.state.grid.clone();
        grid.toggle(row, col);
        self.replace(SimulationState { grid, ..self.state.clone() });
        true
    }

    pub fn load_scene(&mut self, id: SceneId) -> bool {
        if self.state.running {
            debug!(scene = %id, "scene ignored: running");
            return false;
        }
        info!(scene = %id, "loading scene");
        self.load_grid(id.scene().grid())
    }

    /// Replaces the grid with `grid`. Panics if the dimensions differ from the current grid.
    pub fn load_grid(&mut self, grid: Grid) -> bool {
        if self.state.running {
            debug!("grid load ignored: running");
            return false;
        }
        assert_eq!(
            grid.dimensions(),
            self.state.grid.dimensions(),
            "loaded grid must match the active grid dimensions"
        );
        self.replace(SimulationState { grid, generation: 0, ..self.state.clone() });
        true
    }

    /// Armageddon: every cell dies.
    pub fn reset(&mut self) -> bool {
        if self.state.running {
            debug!("armageddon ignored: running");
            return false;
        }
        let (rows, cols) = self.state.grid.dimensions();
        info!("armageddon");
        self.replace(SimulationState {
            grid: Grid::dead(rows, cols),
            generation: 0,
            ..self.state.clone()
        });
        true
    }

    /// Tick interval for the next `start`. Zero is not a valid interval.
    pub fn set_speed(&mut self, ms: u64) -> bool {
        if self.state.running {
            debug!(ms, "speed change ignored: running");
            return false;
        }
        if ms == 0 {
            warn!("speed must be a positive number of milliseconds");
            return false;
        }
        let speed = Duration::from_millis(ms);
        if speed == self.state.speed {
            return false;
        }
        self.replace(SimulationState { speed, ..self.state.clone() });
        true
    }

    fn replace(&mut self, next: SimulationState) {
        self.state = next;
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}

impl<T: Timer> Drop for Simulation<T> {
    fn drop(&mut self) {
        if self.state.running {
            self.timer.cancel();
        }
    }
}
