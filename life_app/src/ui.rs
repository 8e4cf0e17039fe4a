// ui.rs - Toolbar, canvas painting and click handling

use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect, Vec2};
use life::render::{self, CellPainter, CellRect};
use life::{RunState, presets};

use crate::LifeApp;

/// Paints cell rectangles onto an egui canvas.
struct CanvasPainter<'a> {
    painter: &'a Painter,
    origin: Pos2,
    live: Color32,
    dead: Color32,
}

impl CellPainter for CanvasPainter<'_> {
    fn fill_cell(&mut self, rect: CellRect, alive: bool) {
        let rect = Rect::from_min_size(
            self.origin + Vec2::new(rect.x, rect.y),
            Vec2::new(rect.width, rect.height),
        );
        self.painter.rect_filled(rect, 0.0, if alive { self.live } else { self.dead });
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_due_ticks();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let running = self.controller.is_running();
                if ui.button(if running { "⏸ Stop" } else { "▶ Start" }).clicked() {
                    if running { self.stop(); } else { self.start(ctx); }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear();
                }

                ui.separator();

                ui.label("Preset:");
                let names: Vec<&str> = presets::names().collect();
                egui::ComboBox::from_id_source("preset_selector")
                    .selected_text(names[self.selected_preset])
                    .show_ui(ui, |ui| {
                        for (i, name) in names.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_preset, i, *name);
                        }
                    });

                if ui.button("Summon").clicked() {
                    self.summon_selected();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.controller.generation()));
            });

            ui.separator();

            // Speed and colours
            ui.horizontal(|ui| {
                ui.label("Interval:");
                let slider = egui::Slider::new(&mut self.interval_ms, 10..=1000).suffix(" ms");
                if ui.add(slider).changed() && self.controller.is_running() {
                    self.start(ctx);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them. The run stops by itself once nothing changes.");

            // Canvas
            let (w, h) = self.layout.canvas_size(self.controller.grid());
            let (response, painter) = ui.allocate_painter(Vec2::new(w, h), egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::BLACK);
            let mut canvas = CanvasPainter {
                painter: &painter,
                origin,
                live: self.live_color,
                dead: self.dead_color,
            };
            render::paint_grid(self.controller.grid(), &self.layout, &mut canvas);

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - origin;
                    if let Some((x, y)) = self.layout.cell_at(local.x, local.y, self.controller.grid()) {
                        self.toggle(x, y);
                    }
                }
            }

            ui.separator();

            // Statistics
            let grid = self.controller.grid();
            let total = grid.width() * grid.height();
            let live_cells = grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
                if let RunState::Running { interval } = self.controller.state() {
                    ui.label(format!("Running every {} ms", interval.as_millis()));
                }
            });
        });
    }
}
