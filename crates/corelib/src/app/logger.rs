use std::path::PathBuf;

use log::LevelFilter;

// Rasterizer targets, they log once per shape per frame
const PER_FRAME_TARGETS: &[&str] = &["draw"];

/// Logs output settings
///
/// Lines start with a UTC timestamp `[year]-[month]-[day] [hour]:[minute]:[second]`.
/// Per frame targets are capped at `Warn` unless `verbose` is set.
#[derive(Debug, Clone)]
pub struct LogConfig {
    level: LevelFilter,
    verbose: bool,
    colored: bool,
    file_path: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        Self::new(level)
    }
}

impl LogConfig {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            verbose: false,
            colored: cfg!(debug_assertions),
            file_path: None,
        }
    }

    /// Lets the per frame targets log at the main level
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Also appends the lines to a file, colors are disabled then
    pub fn to_file<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_path = Some(path.into());
        self
    }

    fn per_frame_level(&self) -> LevelFilter {
        if self.verbose {
            self.level
        } else {
            self.level.min(LevelFilter::Warn)
        }
    }
}

fn timestamp() -> String {
    let Ok(format) =
        time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
    else {
        return String::new();
    };

    time::OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_default()
}

fn set_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("Unknown");

        match info.location() {
            Some(at) => log::error!("Panic at '{}:{}': {payload}", at.file(), at.line()),
            None => log::error!("Panic: {payload}"),
        }
        default_hook(info);
    }));
}

pub(crate) fn init_logs(config: LogConfig) {
    set_panic_hook();

    let mut dispatch = fern::Dispatch::new().level(config.level);
    for target in PER_FRAME_TARGETS {
        dispatch = dispatch.level_for(*target, config.per_frame_level());
    }

    use fern::colors::{Color, ColoredLevelConfig};
    let colors = (config.colored && config.file_path.is_none()).then(|| {
        ColoredLevelConfig::new()
            .error(Color::BrightRed)
            .warn(Color::BrightYellow)
            .info(Color::BrightGreen)
            .debug(Color::BrightCyan)
            .trace(Color::BrightBlack)
    });

    dispatch = dispatch
        .format(move |out, message, record| match &colors {
            Some(colors) => out.finish(format_args!(
                "\x1b[0m{} [{}] {}\x1b[{}m: {message}",
                timestamp(),
                record.target(),
                colors.color(record.level()),
                Color::White.to_fg_str()
            )),
            None => out.finish(format_args!(
                "{} [{}] {}: {message}",
                timestamp(),
                record.target(),
                record.level()
            )),
        })
        .chain(std::io::stdout());

    if let Some(path) = &config.file_path {
        match fern::log_file(path) {
            Ok(file) => dispatch = dispatch.chain(file),
            Err(e) => eprintln!("Cannot open log file '{}': {e}", path.display()),
        }
    }

    if let Err(e) = dispatch.apply() {
        eprintln!("Error initializing logs: {e}");
    }
}
