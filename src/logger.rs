use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Installs a terminal logger on stderr; stdout is left to prompts and the report.
/// Returns false when a logger was already installed.
pub fn init(level: LevelFilter) -> bool {
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .is_ok()
}
