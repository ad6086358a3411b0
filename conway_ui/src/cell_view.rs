// cell_view.rs - Single cell widget

use conway::Cell;
use egui::{Color32, Sense, Stroke, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub live: Color32,
    pub dead: Color32,
    pub border: Color32,
}

/// One grid cell: paints its state and reports clicks. Holds no state of its own.
pub struct CellView<'a> {
    cell: Cell,
    size: f32,
    palette: &'a Palette,
}

impl<'a> CellView<'a> {
    pub fn new(cell: Cell, size: f32, palette: &'a Palette) -> Self {
        Self { cell, size, palette }
    }

    pub fn color(&self) -> Color32 {
        if self.cell.is_alive() { self.palette.live } else { self.palette.dead }
    }

    pub fn show(self, ui: &mut egui::Ui, on_click: impl FnOnce()) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), Sense::click());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 1.0, self.color());
            painter.rect_stroke(rect, 1.0, Stroke::new(0.5, self.palette.border));
        }
        if response.clicked() {
            on_click();
        }
        response
    }
}
