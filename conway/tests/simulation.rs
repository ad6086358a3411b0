use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use conway::{Grid, SceneId, Simulation, SimulationState, Timer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    Start(Duration),
    Cancel,
}

#[derive(Default)]
struct RecordingTimer {
    events: Vec<TimerEvent>,
    armed: Option<Duration>,
}

impl Timer for RecordingTimer {
    fn start(&mut self, period: Duration) {
        assert!(self.armed.is_none(), "a second timer was armed");
        self.armed = Some(period);
        self.events.push(TimerEvent::Start(period));
    }

    fn cancel(&mut self) {
        self.armed = None;
        self.events.push(TimerEvent::Cancel);
    }
}

fn simulation() -> Simulation<RecordingTimer> {
    Simulation::new(RecordingTimer::default())
}

fn simulation_with(rows: &[&[u8]]) -> Simulation<RecordingTimer> {
    let grid = Grid::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap();
    Simulation::with_grid(grid, RecordingTimer::default())
}

#[test]
fn initial_state() {
    let sim = simulation();
    let state = sim.state();
    assert!(!state.running);
    assert_eq!(state.speed, Duration::from_millis(1000));
    assert_eq!(state.grid, Grid::dead(16, 25));
    assert_eq!(state.generation, 0);
    assert!(sim.timer().events.is_empty());
}

#[test]
fn toggle_cell_flips_and_restores() {
    let mut sim = simulation_with(&[&[0, 0], &[0, 0]]);
    assert!(sim.toggle_cell(0, 0));
    assert_eq!(sim.state().grid.to_rows(), vec![vec![1, 0], vec![0, 0]]);
    assert!(sim.toggle_cell(0, 0));
    assert_eq!(sim.state().grid.to_rows(), vec![vec![0, 0], vec![0, 0]]);
}

#[test]
#[should_panic]
fn toggle_outside_grid_panics() {
    simulation().toggle_cell(16, 0);
}

#[test]
fn start_arms_timer_with_current_speed() {
    let mut sim = simulation();
    assert!(sim.set_speed(250));
    assert!(sim.start());
    assert!(sim.is_running());
    assert_eq!(sim.timer().armed, Some(Duration::from_millis(250)));
}

#[test]
fn start_twice_keeps_a_single_timer() {
    let mut sim = simulation();
    assert!(sim.start());
    assert!(!sim.start());
    let starts = sim
        .timer()
        .events
        .iter()
        .filter(|e| matches!(e, TimerEvent::Start(_)))
        .count();
    assert_eq!(starts, 1);
}

#[test]
fn stop_cancels_timer() {
    let mut sim = simulation();
    sim.start();
    assert!(sim.stop());
    assert!(!sim.is_running());
    assert_eq!(sim.timer().armed, None);
    assert_eq!(sim.timer().events.last(), Some(&TimerEvent::Cancel));
}

#[test]
fn stop_while_stopped_is_a_no_op() {
    let mut sim = simulation();
    assert!(!sim.stop());
    assert!(sim.timer().events.is_empty());
}

#[test]
fn tick_steps_only_while_running() {
    let mut sim = simulation_with(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
    let before = sim.state().clone();
    assert!(!sim.tick());
    assert_eq!(sim.state(), &before);

    sim.start();
    assert!(sim.tick());
    assert_eq!(
        sim.state().grid.to_rows(),
        vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]
    );
    assert_eq!(sim.state().generation, 1);
    assert!(sim.tick());
    assert_eq!(sim.state().grid, before.grid);
    assert_eq!(sim.state().generation, 2);
}

#[test]
fn tick_after_stop_is_dropped() {
    let mut sim = simulation_with(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]);
    sim.start();
    sim.tick();
    sim.stop();
    let stopped = sim.state().clone();
    assert!(!sim.tick());
    assert_eq!(sim.state(), &stopped);
}

#[test]
fn mutations_are_ignored_while_running() {
    let mut sim = simulation();
    sim.load_scene(SceneId::First);
    sim.start();
    let running = sim.state().clone();

    assert!(!sim.toggle_cell(0, 0));
    assert!(!sim.load_scene(SceneId::Second));
    assert!(!sim.load_grid(Grid::default()));
    assert!(!sim.reset());
    assert!(!sim.set_speed(50));

    assert_eq!(sim.state(), &running);
}

#[test]
fn reset_kills_every_cell() {
    let mut sim = simulation_with(&vec![&[1u8; 25][..]; 16]);
    assert_eq!(sim.state().grid.population(), 16 * 25);
    assert!(sim.reset());
    assert_eq!(sim.state().grid, Grid::dead(16, 25));
}

#[test]
fn reset_keeps_dimensions() {
    let mut sim = simulation_with(&[&[1, 1], &[1, 0]]);
    sim.reset();
    assert_eq!(sim.state().grid.to_rows(), vec![vec![0, 0], vec![0, 0]]);
}

#[test]
fn scenes_load_exact_copies() {
    let mut sim = simulation();
    for id in SceneId::ALL {
        assert!(sim.load_scene(id));
        assert_eq!(sim.state().grid, id.scene().grid());
    }
}

#[test]
fn edits_to_a_loaded_scene_do_not_touch_the_preset() {
    let mut sim = simulation();
    sim.load_scene(SceneId::First);
    sim.toggle_cell(0, 0);
    sim.load_scene(SceneId::First);
    assert_eq!(sim.state().grid, SceneId::First.scene().grid());
}

#[test]
fn loading_resets_generation() {
    let mut sim = simulation();
    sim.load_scene(SceneId::Second);
    sim.start();
    sim.tick();
    sim.stop();
    assert_eq!(sim.state().generation, 1);
    sim.load_scene(SceneId::Second);
    assert_eq!(sim.state().generation, 0);
}

#[test]
#[should_panic(expected = "must match the active grid dimensions")]
fn loading_mismatched_grid_panics() {
    simulation().load_grid(Grid::dead(2, 2));
}

#[test]
fn set_speed_rejects_zero() {
    let mut sim = simulation();
    assert!(!sim.set_speed(0));
    assert_eq!(sim.state().speed, Duration::from_millis(1000));
    assert!(sim.set_speed(50));
    assert_eq!(sim.state().speed, Duration::from_millis(50));
}

#[test]
fn new_speed_applies_on_next_start() {
    let mut sim = simulation();
    sim.start();
    sim.stop();
    sim.set_speed(300);
    sim.start();
    assert_eq!(sim.timer().armed, Some(Duration::from_millis(300)));
}

#[test]
fn observers_see_every_change_and_nothing_else() {
    let seen: Rc<RefCell<Vec<SimulationState>>> = Rc::default();
    let mut sim = simulation();
    let sink = Rc::clone(&seen);
    sim.subscribe(move |state| sink.borrow_mut().push(state.clone()));

    sim.toggle_cell(3, 4);
    sim.start();
    sim.toggle_cell(0, 0);
    sim.tick();
    sim.stop();
    sim.stop();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    assert!(seen[0].grid.get(3, 4).is_alive());
    assert!(seen[1].running);
    assert_eq!(seen[2].generation, 1);
    assert!(!seen[3].running);
    assert_eq!(seen.last(), Some(sim.state()));
}

#[test]
fn dropping_a_running_simulation_cancels_its_timer() {
    let cancelled = Rc::new(RefCell::new(false));

    struct FlagTimer(Rc<RefCell<bool>>);
    impl Timer for FlagTimer {
        fn start(&mut self, _period: Duration) {}
        fn cancel(&mut self) {
            *self.0.borrow_mut() = true;
        }
    }

    let mut sim = Simulation::new(FlagTimer(Rc::clone(&cancelled)));
    sim.start();
    *cancelled.borrow_mut() = false;
    drop(sim);
    assert!(*cancelled.borrow());
}
