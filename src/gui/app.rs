use super::{Config, FpsLimiter};
use crate::{Result, World};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin, ViewportCommand};
use std::time::Duration;

pub struct App {
    pub(super) world: World,             // The automaton being shown and edited.
    pub(super) is_paused: bool,          // Flag indicating whether generations advance on their own.
    pub(super) show_grid: bool,          // Draw lines between cells.
    pub(super) frame_dt: Duration,       // Duration of the previous frame, fed to the stepping.
    pub(super) fps_limiter: FpsLimiter,  // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,
    pub(super) random_seed: u64,         // Seed for "Random fill".
    pub(super) fill_rate: f64,
}

impl App {
    pub fn new(world: World) -> Self {
        Self {
            world,
            is_paused: true,
            show_grid: true,
            frame_dt: Duration::ZERO,
            fps_limiter: FpsLimiter::default(),
            max_fps: Config::MAX_FPS,
            random_seed: 42,
            fill_rate: Config::FILL_RATE,
        }
    }

    /// Logs a rejected request; the world is left as it was.
    pub(super) fn report<T>(result: Result<T>) {
        if let Err(e) = result {
            log::warn!("Request ignored: {}", e);
        }
    }

    pub(super) fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        log::debug!("{}", if self.is_paused { "Paused" } else { "Running" });
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let pressed = |key| ctx.input(|input| input.key_pressed(key));

        if pressed(Key::Space) {
            self.toggle_pause();
        }
        if pressed(Key::G) {
            self.show_grid = !self.show_grid;
        }
        // history navigation only makes sense on a stopped world
        if !self.is_paused {
            return;
        }
        if pressed(Key::ArrowUp) {
            self.world.advance();
        }
        if pressed(Key::ArrowDown) {
            Self::report(self.world.step_back());
        }
        if pressed(Key::ArrowRight) {
            Self::report(self.world.step_forward());
        }
        if pressed(Key::R) {
            Self::report(self.world.reset());
        }
    }

    fn update_world(&mut self) {
        if !self.is_paused {
            self.world.tick(self.frame_dt);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::WHITE),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                self.draw(ui);

                self.update_world();
            });

        ctx.send_viewport_cmd(ViewportCommand::Title(format!(
            "Life Viewer | FPS: {:.2}",
            self.fps_limiter.fps()
        )));
        self.frame_dt = self.fps_limiter.sleep(self.max_fps);
    }
}
