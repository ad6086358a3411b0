// ui.rs - Grid view and control panel

use conway::SceneId;
use eframe::egui;
use egui::Vec2;

use crate::LifeApp;
use crate::cell_view::CellView;
use crate::settings::SPEED_RANGE;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

impl LifeApp {
    /// One frame: apply the ticks that fired since the last frame, then draw.
    pub fn frame(&mut self, ctx: &egui::Context) {
        // Apply every firing since the last frame, in order
        for _ in 0..self.simulation.timer_mut().take_due() {
            self.simulation.tick();
        }
        debug_assert_eq!(self.simulation.is_running(), self.simulation.timer().is_armed());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");
            ui.separator();

            self.controls(ui);
            ui.separator();

            self.grid_view(ui);
            ui.separator();

            self.status(ui);
        });
    }

    /// "Begin life" / "Stop evolution".
    pub fn toggle_running(&mut self) {
        if self.simulation.is_running() {
            self.simulation.stop();
        } else {
            self.simulation.start();
        }
    }

    /// Clicks are not forwarded while the simulation runs.
    pub fn cell_clicked(&mut self, row: usize, col: usize) {
        if !self.simulation.is_running() {
            self.simulation.toggle_cell(row, col);
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let running = self.simulation.is_running();

        ui.horizontal(|ui| {
            ui.label("Game speed:");
            let speed = egui::DragValue::new(&mut self.speed_input)
                .clamp_range(SPEED_RANGE)
                .speed(10)
                .suffix(" ms");
            if ui.add_enabled(!running, speed).changed() {
                self.simulation.set_speed(self.speed_input);
            }

            ui.separator();

            for id in SceneId::ALL {
                if ui.add_enabled(!running, egui::Button::new(id.label())).clicked() {
                    self.simulation.load_scene(id);
                }
            }
        });

        ui.horizontal(|ui| {
            let caption = if running { "Stop evolution" } else { "Begin life" };
            if ui.button(caption).clicked() {
                self.toggle_running();
            }

            if ui.add_enabled(!running, egui::Button::new("Armageddon")).clicked() {
                self.simulation.reset();
            }
        });
    }

    fn grid_view(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing = Vec2::splat(1.0);
            for (row, cells) in self.simulation.state().grid.iter_rows().enumerate() {
                ui.horizontal(|ui| {
                    for (col, &cell) in cells.iter().enumerate() {
                        CellView::new(cell, self.cell_size, &self.palette)
                            .show(ui, || clicked = Some((row, col)));
                    }
                });
            }
        });

        if let Some((row, col)) = clicked {
            self.cell_clicked(row, col);
        }
    }

    fn status(&self, ui: &mut egui::Ui) {
        let state = self.simulation.state();
        let total = state.grid.rows() * state.grid.cols();
        let live = state.grid.population();

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", state.generation));
            ui.label(format!("Live cells: {}", live));
            ui.label(format!("Dead cells: {}", total - live));
            ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
        });
    }
}
