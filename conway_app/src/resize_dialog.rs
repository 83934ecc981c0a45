// resize_dialog.rs - Grid size dialog with an optional N x N lock

use eframe::egui;

use crate::settings::MAX_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Open,
    Accepted { width: i32, height: i32 },
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeDialog {
    width: i32,
    height: i32,
    lock_square: bool,
}

impl ResizeDialog {
    /// Prefilled with the current size. Square grids start locked.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.clamp(1, MAX_SIDE),
            height: height.clamp(1, MAX_SIDE),
            lock_square: width == height,
        }
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn is_locked(&self) -> bool {
        self.lock_square
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width.clamp(1, MAX_SIDE);
        if self.lock_square {
            self.height = self.width;
        }
    }

    pub fn set_height(&mut self, height: i32) {
        self.height = height.clamp(1, MAX_SIDE);
        if self.lock_square {
            self.width = self.height;
        }
    }

    /// Locking does not touch the current values; the next edit syncs them.
    pub fn set_locked(&mut self, locked: bool) {
        self.lock_square = locked;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogOutcome {
        let mut outcome = DialogOutcome::Open;

        egui::Window::new("Resize grid")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                let (mut width, mut height) = self.size();
                if ui
                    .add(
                        egui::DragValue::new(&mut width)
                            .clamp_range(1..=MAX_SIDE)
                            .prefix("Width: "),
                    )
                    .changed()
                {
                    self.set_width(width);
                }

                if ui
                    .add(
                        egui::DragValue::new(&mut height)
                            .clamp_range(1..=MAX_SIDE)
                            .prefix("Height: "),
                    )
                    .changed()
                {
                    self.set_height(height);
                }

                let mut locked = self.is_locked();
                if ui.checkbox(&mut locked, "Lock N×N").changed() {
                    self.set_locked(locked);
                }

                ui.label("Resizing clears the grid.");

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        let (width, height) = self.size();
                        outcome = DialogOutcome::Accepted { width, height };
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = DialogOutcome::Cancelled;
                    }
                });
            });

        outcome
    }
}
