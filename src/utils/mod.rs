mod format_int;
mod parse_rle;
mod presets;

pub use format_int::NiceInt;
pub use parse_rle::{parse_rle, RlePattern};
pub use presets::Preset;
