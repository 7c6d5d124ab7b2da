//! Command-line interface for the atelier binary.

mod commands;
mod handlers;

pub use commands::{Cli, Commands, LogFormatArg, PersonaArgs};
pub use handlers::{load_config, mime_for_path, read_image, run};
