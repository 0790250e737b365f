use eframe::egui;
use tokio::sync::mpsc;

use engine::game::{Direction, EndReason, GamePhase, GameSnapshot, Point};

use crate::state::{GameCommand, SharedState};

const COLOR_FIELD: egui::Color32 = egui::Color32::BLACK;
const COLOR_SNAKE: egui::Color32 = egui::Color32::from_rgb(0x00, 0xFF, 0x00);
const COLOR_FOOD: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x00, 0x00);

// Cells are drawn slightly inset so the body reads as segments.
const CELL_INSET: f32 = 2.0;

pub struct GameApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<GameCommand>,
    cell_size: f32,
}

impl GameApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<GameCommand>,
        cell_size_px: u32,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            cell_size: cell_size_px as f32,
        }
    }

    fn handle_input(&self, ctx: &egui::Context, phase: GamePhase) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                let _ = self.command_tx.send(GameCommand::Quit);
                return;
            }

            if phase == GamePhase::Over {
                let any_key = i
                    .events
                    .iter()
                    .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }));
                if any_key || i.pointer.any_pressed() {
                    let _ = self.command_tx.send(GameCommand::Reset);
                }
                return;
            }

            if i.key_pressed(egui::Key::P) {
                let _ = self.command_tx.send(GameCommand::TogglePause);
            }

            let direction = if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Direction::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Direction::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Direction::Right)
            } else {
                None
            };

            if let Some(direction) = direction {
                let _ = self.command_tx.send(GameCommand::Turn { direction });
            }
        });
    }

    fn render_field(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let canvas_width = snapshot.grid.width as f32 * self.cell_size;
        let canvas_height = snapshot.grid.height as f32 * self.cell_size;

        let (response, painter) = ui.allocate_painter(
            egui::Vec2::new(canvas_width, canvas_height),
            egui::Sense::hover(),
        );

        let rect = response.rect;
        painter.rect_filled(rect, 0.0, COLOR_FIELD);

        self.fill_cell(&painter, rect.min, snapshot.food, COLOR_FOOD);
        for cell in &snapshot.cells {
            self.fill_cell(&painter, rect.min, *cell, COLOR_SNAKE);
        }
    }

    fn fill_cell(
        &self,
        painter: &egui::Painter,
        canvas_min: egui::Pos2,
        cell: Point,
        color: egui::Color32,
    ) {
        let pos = egui::pos2(
            canvas_min.x + cell.x as f32 * self.cell_size,
            canvas_min.y + cell.y as f32 * self.cell_size,
        );
        let rect = egui::Rect::from_min_size(
            pos,
            egui::vec2(self.cell_size - CELL_INSET, self.cell_size - CELL_INSET),
        );
        painter.rect_filled(rect, 0.0, color);
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.shared_state.should_close() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let snapshot = self.shared_state.snapshot();

        if let Some(ref snap) = snapshot {
            self.handle_input(ctx, snap.phase);
        }

        egui::CentralPanel::default().show(ctx, |ui| match &snapshot {
            Some(snap) => {
                ui.horizontal(|ui| {
                    ui.heading(format!("Score: {}", snap.score));
                    ui.separator();
                    ui.heading(format!("High Score: {}", snap.high_score));
                });
                ui.separator();

                self.render_field(ui, snap);

                match snap.phase {
                    GamePhase::Running => {}
                    GamePhase::Paused => {
                        ui.separator();
                        ui.heading("PAUSED");
                        ui.label("Press P to resume");
                    }
                    GamePhase::Over => {
                        ui.separator();
                        ui.heading("GAME OVER");
                        if let Some(reason) = snap.end_reason {
                            ui.label(end_reason_text(reason));
                        }
                        ui.label(format!("Final Score: {}", snap.score));
                        ui.label(format!("High Score: {}", snap.high_score));
                        ui.label("Click or press any key to restart, Q to quit");
                    }
                }
            }
            None => {
                ui.heading("Starting...");
                ui.spinner();
            }
        });

        ctx.request_repaint();
    }
}

fn end_reason_text(reason: EndReason) -> &'static str {
    match reason {
        EndReason::WallCollision => "You hit the wall",
        EndReason::SelfCollision => "You ran into yourself",
        EndReason::BoardFull => "You filled the whole field",
    }
}
