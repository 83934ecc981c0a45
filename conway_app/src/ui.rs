// ui.rs - Toolbar, canvas and status bar

use eframe::egui;
use egui::{Color32, PointerButton, Sense, Stroke};

use conway::patterns;

use crate::ConwayApp;
use crate::resize_dialog::DialogOutcome;
use crate::settings::{MAX_SPEED, MIN_SPEED};
use crate::simulation::lock;

/// Grid lines are skipped below this cell size; they would cover the cells.
const MIN_ZOOM_FOR_LINES: f32 = 4.0;

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui, ctx));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));
        self.resize_dialog_window(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // No sweep may be left running against a grid that is going away.
        self.runner.stop();
        self.save_settings();
    }
}

impl ConwayApp {
    fn toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let running = self.runner.is_running();

        ui.horizontal(|ui| {
            if ui.add_enabled(!running, egui::Button::new("⏭ Step")).clicked() {
                self.step();
            }

            let mut run = running;
            if ui.toggle_value(&mut run, if running { "⏸ Pause" } else { "▶ Run" }).changed() {
                self.set_running(run, ctx);
            }

            if ui.button("⏹ Clear").clicked() {
                self.clear_grid();
            }

            let mut wrap = lock(&self.sim).grid().wrap();
            if ui.toggle_value(&mut wrap, "Wrap grid").changed() {
                self.set_wrap(wrap);
            }

            let mut paint = self.brush.enabled();
            if ui.toggle_value(&mut paint, "✏ Paint").changed() {
                self.brush.set_enabled(paint);
            }

            if ui.button("Resize…").clicked() {
                self.open_resize_dialog();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply").clicked() {
                self.apply_selected_pattern();
            }

            if ui.button("🎲 Random").clicked() {
                self.apply_random_pattern();
            }
        });

        ui.horizontal(|ui| {
            let mut speed = self.runner.speed();
            if ui
                .add(egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED).text("Max iterations/s"))
                .changed()
            {
                self.set_speed(speed);
            }

            let mut stop_on_cycle = self.settings.stop_on_cycle;
            if ui.checkbox(&mut stop_on_cycle, "Pause when repeating").changed() {
                self.settings.stop_on_cycle = stop_on_cycle;
                self.runner.set_stop_on_cycle(stop_on_cycle);
            }

            ui.separator();

            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn status_bar(&mut self, ui: &mut egui::Ui) {
        let sim = lock(&self.sim);
        let grid = sim.grid();
        let (w, h) = grid.dimensions();
        let total = w * h;
        let live = grid.population();

        ui.horizontal(|ui| {
            ui.label(format!("Generation: {}", sim.generation()));
            ui.separator();
            ui.label(format!("Size: {w}×{h}"));
            ui.separator();
            ui.label(format!("Live cells: {live}"));
            ui.label(format!("Dead cells: {}", total - live));
            ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas = response.rect;

        if response.hovered() {
            let scroll = ui.input(|i| i.scroll_delta.y);
            if scroll != 0.0 {
                self.view.zoom_by(scroll);
            }
        }
        if response.dragged_by(PointerButton::Secondary) {
            self.view.pan(response.drag_delta());
        }

        let mut sim = lock(&self.sim);
        let dims = sim.grid().dimensions();

        let (pressed, down) = ui.input(|i| (i.pointer.primary_pressed(), i.pointer.primary_down()));
        if let Some(pos) = response.hover_pos() {
            let cell = self.view.screen_to_cell(canvas, dims, pos);
            if pressed {
                self.brush.press(sim.grid_mut(), cell);
            } else if down {
                self.brush.drag(sim.grid_mut(), cell);
            }
        }
        if !down {
            self.brush.release();
        }
        if self.brush.is_painting() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        let grid_rect = self.view.grid_rect(canvas, dims);
        painter.rect_filled(grid_rect.intersect(canvas), 0.0, self.dead_color);

        // Only the cells that can be on screen.
        let (cols, rows) = self.view.visible_range(canvas, dims);
        let grid = sim.grid();
        for y in rows.clone() {
            let row = &grid.cells()[y * dims.0..(y + 1) * dims.0];
            for x in cols.clone() {
                if row[x].is_alive() {
                    let rect = self.view.cell_rect(grid_rect, x, y).shrink(0.5);
                    painter.rect_filled(rect, 0.0, self.live_color);
                }
            }
        }

        if self.view.zoom >= MIN_ZOOM_FOR_LINES {
            let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(127, 127, 127, 127));
            let top = grid_rect.top().max(canvas.top());
            let bottom = grid_rect.bottom().min(canvas.bottom());
            let left = grid_rect.left().max(canvas.left());
            let right = grid_rect.right().min(canvas.right());

            for x in cols.start..=cols.end {
                let line_x = grid_rect.left() + x as f32 * self.view.zoom;
                painter.line_segment([egui::pos2(line_x, top), egui::pos2(line_x, bottom)], stroke);
            }
            for y in rows.start..=rows.end {
                let line_y = grid_rect.top() + y as f32 * self.view.zoom;
                painter.line_segment([egui::pos2(left, line_y), egui::pos2(right, line_y)], stroke);
            }
        }
    }

    fn resize_dialog_window(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.resize_dialog.as_mut() else {
            return;
        };
        match dialog.show(ctx) {
            DialogOutcome::Open => {}
            DialogOutcome::Cancelled => self.resize_dialog = None,
            DialogOutcome::Accepted { width, height } => {
                self.resize_grid(width, height);
                self.resize_dialog = None;
            }
        }
    }
}
