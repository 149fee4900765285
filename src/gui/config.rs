use eframe::egui::Color32;

/// Appearance of the viewer.
pub struct Config;

impl Config {
    pub const MAX_FPS: f64 = 144.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const WIDGET_GAP: f32 = 20.;

    pub const CELL_ALIVE: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
    pub const CELL_DEAD: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
    pub const GRID_COLOUR: Color32 = Color32::from_rgb(0xaa, 0xaa, 0xaa);
    pub const GRID_WIDTH: f32 = 1.;
    /// Grid lines are hidden when cells get smaller than this many pixels.
    pub const MIN_CELL_PX_FOR_GRID: f32 = 4.;

    pub const MAX_SPEED: u32 = 100;
    pub const FILL_RATE: f64 = 0.3;
}
