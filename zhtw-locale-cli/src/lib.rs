//! CLI library for testing purposes

pub mod convert;
pub mod settings;
pub mod voice;

pub use convert::{ConvertOptions, run_convert_command};
pub use settings::load_config;
pub use voice::run_voice_command;
