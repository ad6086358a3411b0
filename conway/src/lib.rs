//! Conway's Game of Life on a bounded grid: the step rule, three seed scenes and the
//! run/stop controller that drives the step from a repeating timer.

pub mod error;
pub mod grid;
pub mod rules;
pub mod scenes;
pub mod simulation;

pub use error::{GridError, UnknownScene};
pub use grid::{Cell, DEFAULT_COLS, DEFAULT_ROWS, Grid};
pub use rules::step;
pub use scenes::{SCENES, Scene, SceneId};
pub use simulation::{DEFAULT_SPEED, Simulation, SimulationState, Timer};
