use env_logger::{Builder, Env};
use log::LevelFilter;

/// Install the global logger. `--debug` turns on debug output for this crate;
/// `RUST_LOG` still wins when set.
pub fn init_logging(debug_mode: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if debug_mode {
        builder.filter_module("font_integrity", LevelFilter::Debug);
    }
    // A logger may already be installed when running under a test harness
    let _ = builder.try_init();
}
