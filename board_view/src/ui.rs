// ui.rs - egui front end: drives runs one generation per frame and keeps
// its own copy of the displayed cells, patched from tick diffs.

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_board::patterns::PATTERNS;
use life_board::{ALIVE, Board, BoardError, CellChange, FrameOutcome, RunReport};

pub struct BoardApp {
    board: Board,
    // What is on screen, row-major, same (row, col) layout as the board
    displayed: Vec<bool>,
    height: usize,
    width: usize,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    last_report: Option<RunReport>,
    last_error: Option<String>,
}

impl BoardApp {
    pub fn new(board: Board) -> Self {
        let mut app = Self {
            board,
            displayed: Vec::new(),
            height: 0,
            width: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            last_report: None,
            last_error: None,
        };
        app.redraw_all();
        app
    }

    /// Full redraw after the board is rebuilt.
    fn redraw_all(&mut self) {
        let grid = self.board.grid();
        self.height = grid.height();
        self.width = grid.width();
        self.displayed = grid.as_slice().iter().map(|&cell| cell == ALIVE).collect();
    }

    /// Patch only the cells that changed.
    fn apply(&mut self, changes: &[CellChange]) {
        for change in changes {
            self.displayed[change.row * self.width + change.col] = change.value == ALIVE;
        }
    }

    fn record(&mut self, result: Result<(), BoardError>) {
        self.last_error = result.err().map(|err| err.to_string());
    }

    // Both rebuild the board, which cancels any run in flight.
    fn reset_board(&mut self) {
        let result = self.board.reset();
        self.last_report = self.board.last_run().cloned();
        self.redraw_all();
        self.record(result);
    }

    fn apply_pattern(&mut self) {
        self.board.load_pattern(&PATTERNS[self.selected_pattern]);
        self.last_report = self.board.last_run().cloned();
        self.redraw_all();
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let running = self.board.is_running();

        ui.horizontal(|ui| {
            if ui.button("⟲ Reset").clicked() {
                self.reset_board();
            }

            if ui.add_enabled(!running, egui::Button::new("⏭ Tick")).clicked() {
                match self.board.tick() {
                    Ok(changes) => {
                        self.apply(&changes);
                        self.last_error = None;
                    }
                    Err(err) => self.last_error = Some(err.to_string()),
                }
            }

            ui.separator();

            if ui.add_enabled(!running, egui::Button::new("▶ 10")).clicked() {
                let result = self.board.run_10_generations();
                self.record(result);
            }
            if ui.add_enabled(!running, egui::Button::new("▶ 100")).clicked() {
                let result = self.board.run_100_generations();
                self.record(result);
            }
            if ui.add_enabled(!running, egui::Button::new("▶ 1000")).clicked() {
                let result = self.board.run_1000_generations();
                self.record(result);
            }
            if ui.add_enabled(running, egui::Button::new("⏹ Cancel")).clicked() {
                if let Some(report) = self.board.cancel() {
                    self.last_report = Some(report);
                }
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                self.apply_pattern();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);

            ui.separator();

            ui.label(format!("Generation: {}", self.board.generation()));
            if running {
                ui.label(format!("Run: {}/{}", self.board.step_count(), self.board.max_steps()));
            }
        });
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let spacing = 0.5;
        let available = ui.available_size();
        let box_size = ((available.x / self.width as f32).min(available.y / self.height as f32) - spacing)
            .clamp(1.0, 15.0);
        let pitch = box_size + spacing;

        let total_size = Vec2::new(pitch * self.width as f32, pitch * self.height as f32);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, self.dead_color);

        for (idx, _) in self.displayed.iter().enumerate().filter(|&(_, &alive)| alive) {
            let (row, col) = (idx / self.width, idx % self.width);
            let rect = Rect::from_min_size(
                egui::pos2(origin.x + col as f32 * pitch, origin.y + row as f32 * pitch),
                Vec2::splat(box_size),
            );
            painter.rect_filled(rect, 0.0, self.live_color);
        }
        painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(60)));

        // Toggle cells only when no run is active
        if !self.board.is_running() && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let col = ((pos.x - origin.x) / pitch) as usize;
                let row = ((pos.y - origin.y) / pitch) as usize;
                if let Ok(value) = self.board.toggle_cell(row, col) {
                    self.displayed[row * self.width + col] = value == ALIVE;
                }
            }
        }
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The frame callback is the yield point: at most one generation per frame.
        match self.board.poll_frame() {
            FrameOutcome::Stepped { changes, .. } => self.apply(&changes),
            FrameOutcome::Finished(report) => self.last_report = Some(report),
            FrameOutcome::Idle => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            self.controls(ui);

            ui.separator();

            ui.horizontal(|ui| {
                let live = self.board.live_count();
                let total = self.height * self.width;
                ui.label(format!("{}x{}", self.height, self.width));
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Population: {:.1}%", live as f32 / total.max(1) as f32 * 100.0));
                if let Some(report) = &self.last_report {
                    ui.label(format!(
                        "Last run: {}/{} generations in {:.1} ms{}",
                        report.generations,
                        report.requested,
                        report.elapsed.as_secs_f64() * 1000.0,
                        if report.cancelled { " (cancelled)" } else { "" }
                    ));
                }
            });

            if let Some(err) = &self.last_error {
                ui.colored_label(Color32::from_rgb(220, 80, 80), err);
            }

            ui.separator();

            self.draw_grid(ui);
        });

        // Keep frames coming while a run is active
        if self.board.is_running() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_board::BoardOptions;

    fn running_app() -> BoardApp {
        let board = Board::new(BoardOptions::random(20, 20, 0.3).seeded(1)).unwrap();
        let mut app = BoardApp::new(board);
        app.board.run_100_generations().unwrap();
        app.board.poll_frame();
        app.board.poll_frame();
        app
    }

    #[test]
    fn reset_mid_run_shows_cancelled_run() {
        let mut app = running_app();
        app.reset_board();
        assert!(!app.board.is_running());
        let report = app.last_report.as_ref().unwrap();
        assert!(report.cancelled);
        assert_eq!(report.generations, 2);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn pattern_mid_run_shows_cancelled_run() {
        let mut app = running_app();
        app.apply_pattern();
        assert!(app.last_report.as_ref().unwrap().cancelled);
        assert_eq!(app.displayed.iter().filter(|&&alive| alive).count(), app.board.live_count());
    }
}
