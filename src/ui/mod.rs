//! Terminal UI: file tables, progress bars, and interactive prompts.

pub mod display;
pub mod progress;
pub mod prompt;

pub use display::{clear_screen, print_banner, show_file_info, show_source_deleted, show_success};
