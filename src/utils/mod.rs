pub mod file;
pub mod naming;
pub mod logging;

pub use file::{find_font_files, remove_font_file};
pub use naming::{clean_display_name, format_megabytes, truncate_chars};
pub use logging::init_logging;
