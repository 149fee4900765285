use super::{App, Config};
use crate::{NiceInt, Preset};
use eframe::egui::{
    pos2, vec2, Button, Checkbox, DragValue, Pos2, Rect, RichText, Sense, Slider, Stroke, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_run_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.toggle_pause();
        }

        ui.add_enabled_ui(self.is_paused, |ui| {
            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Back")).clicked() {
                    Self::report(self.world.step_back());
                }
                if ui.add(Self::new_button("Next step")).clicked() {
                    self.world.advance();
                }
                let can_replay = self.world.history().can_replay();
                if ui
                    .add_enabled(can_replay, Self::new_button("Forward"))
                    .clicked()
                {
                    Self::report(self.world.step_forward());
                }
            });

            if ui.add(Self::new_button("Rewind to start")).clicked() {
                Self::report(self.world.reset());
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Speed: "));
            let mut speed = self.world.speed();
            ui.add(Slider::new(&mut speed, 0..=Config::MAX_SPEED));
            self.world.set_speed(speed);
        });
    }

    fn draw_edit_controls(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text("Presets:"));
        ui.horizontal_wrapped(|ui| {
            for preset in Preset::ALL {
                if ui.add(Self::new_button(preset.name())).clicked() {
                    Self::report(self.world.load_preset(preset));
                }
            }
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Random fill")).clicked() {
                self.world.randomize(Some(self.random_seed), self.fill_rate);
            }
            ui.label(Self::new_text("seed: "));
            ui.add(DragValue::new(&mut self.random_seed));
        });
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Fill rate: "));
            ui.add(Slider::new(&mut self.fill_rate, 0.0..=1.0));
        });

        if ui.add(Self::new_button("Clear")).clicked() {
            self.world.clear();
        }
        ui.add(Checkbox::new(
            &mut self.show_grid,
            Self::new_text("Grid lines"),
        ));
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let history = self.world.history();
        let stats = format!(
            "Rule: {}\nGeneration: {}\nHistory: {} snapshots\nMemory: {} bytes\nPopulation: {}\nFPS: {:3}",
            self.world.rule(),
            NiceInt::from_usize(self.world.generation()),
            NiceInt::from_usize(history.len()),
            NiceInt::from_usize(self.world.bytes_total()),
            NiceInt::from_usize(self.world.grid().population()),
            self.fps_limiter.fps().round() as u32,
        );
        ui.label(Self::new_text(&stats));

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max FPS: "));
            ui.add(Slider::new(&mut self.max_fps, 5.0..=480.0).logarithmic(true));
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_run_controls(ui);
                    ui.add_space(Config::WIDGET_GAP);
                    self.draw_edit_controls(ui);
                    ui.add_space(Config::WIDGET_GAP);
                    self.draw_stats(ui);
                });
            });
        });
    }

    /// Cell under the pointer, if the pointer is over the grid.
    fn cell_at(&self, origin: Pos2, cell_px: f32, pos: Pos2) -> Option<(usize, usize)> {
        let x = ((pos.x - origin.x) / cell_px).floor() as i64;
        let y = ((pos.y - origin.y) / cell_px).floor() as i64;
        self.world
            .grid()
            .contains(x, y)
            .then_some((x as usize, y as usize))
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        let (response, painter) = ui.allocate_painter(vec2(size_px, size_px), Sense::click());
        let (w, h) = self.world.grid().size();
        let cell_px = (size_px / w as f32).min(size_px / h as f32);
        let origin = response.rect.min;

        if response.clicked() {
            let cell = response
                .interact_pointer_pos()
                .and_then(|pos| self.cell_at(origin, cell_px, pos));
            match cell {
                Some((x, y)) => Self::report(self.world.toggle(x, y)),
                None => log::debug!("Click outside the grid ignored"),
            }
        }

        let field = Rect::from_min_size(origin, vec2(cell_px * w as f32, cell_px * h as f32));
        painter.rect_filled(field, 0., Config::CELL_DEAD);
        for (x, y) in self.world.grid().iter_alive() {
            let min = origin + vec2(x as f32 * cell_px, y as f32 * cell_px);
            painter.rect_filled(
                Rect::from_min_size(min, vec2(cell_px, cell_px)),
                0.,
                Config::CELL_ALIVE,
            );
        }

        if self.show_grid && cell_px >= Config::MIN_CELL_PX_FOR_GRID {
            let stroke = Stroke::new(Config::GRID_WIDTH, Config::GRID_COLOUR);
            for col in 0..=w {
                let x = origin.x + col as f32 * cell_px;
                painter.line_segment([pos2(x, field.top()), pos2(x, field.bottom())], stroke);
            }
            for row in 0..=h {
                let y = origin.y + row as f32 * cell_px;
                painter.line_segment([pos2(field.left(), y), pos2(field.right(), y)], stroke);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(0.);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space((ui.available_width() - size_px).max(0.));

            self.draw_field(ui, size_px);
        });
    }
}
