//! Console logger and ANSI paint helpers.
//!
//! The logger is an observational capability: command engines take
//! `Option<&Logger>` and every call site stays silent when it is absent.
//! Each level comes in a with-newline and a no-newline variant; the
//! no-newline form backs the `"Verb origin to destination ..."` progress
//! lines that are completed by a `✓`/`✕` glyph on the same logical line.
//!
//! Internal diagnostics go through `tracing` (see `main`), not through this
//! type — the logger is user-facing output only.

use std::io::Write as _;

const RESET: &str = "\x1b[0m";

fn paint(code: &str, text: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Paint `text` blue when `enabled`. Used for paths in progress lines.
#[must_use]
pub fn blue(text: &str, enabled: bool) -> String {
    paint("34", text, enabled)
}

/// Paint `text` green when `enabled`. Used for the success glyph.
#[must_use]
pub fn green(text: &str, enabled: bool) -> String {
    paint("32", text, enabled)
}

/// Paint `text` red when `enabled`. Used for the failure glyph and diff deletions.
#[must_use]
pub fn red(text: &str, enabled: bool) -> String {
    paint("31", text, enabled)
}

/// Paint `text` yellow when `enabled`.
#[must_use]
pub fn yellow(text: &str, enabled: bool) -> String {
    paint("33", text, enabled)
}

/// Paint `text` cyan when `enabled`.
#[must_use]
pub fn cyan(text: &str, enabled: bool) -> String {
    paint("36", text, enabled)
}

/// Paint `text` magenta when `enabled`.
#[must_use]
pub fn magenta(text: &str, enabled: bool) -> String {
    paint("35", text, enabled)
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DBG: ",
            Self::Info => "INF: ",
            Self::Warn => "WRN: ",
            Self::Error => "ERR: ",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::Debug => "35",
            Self::Info => "36",
            Self::Warn => "33",
            Self::Error => "31",
        }
    }
}

/// Generate the with-newline and no-newline method pair for one level.
macro_rules! leveled {
    ($(#[$doc:meta])* $name:ident, $name_no_nl:ident, $level:expr) => {
        $(#[$doc])*
        pub fn $name(&self, msg: &str) {
            self.emit(Some($level), msg, true);
        }

        #[doc = concat!("Like [`Self::", stringify!($name), "`] but without a trailing newline.")]
        pub fn $name_no_nl(&self, msg: &str) {
            self.emit(Some($level), msg, false);
        }
    };
}

/// Leveled, optionally-colorized stdout logger.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    color: bool,
}

impl Logger {
    /// Create a logger; `color` gates every ANSI escape it emits.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Whether ANSI colorization is enabled.
    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    leveled!(
        /// Log a debug message with a `DBG:` prefix.
        debug, debug_no_nl, Level::Debug
    );
    leveled!(
        /// Log an informational message with an `INF:` prefix.
        info, info_no_nl, Level::Info
    );
    leveled!(
        /// Log a warning with a `WRN:` prefix.
        warn, warn_no_nl, Level::Warn
    );
    leveled!(
        /// Log an error with an `ERR:` prefix.
        error, error_no_nl, Level::Error
    );

    /// Log a line without any level prefix.
    pub fn plain(&self, msg: &str) {
        self.emit(None, msg, true);
    }

    /// Like [`Self::plain`] but without a trailing newline; flushes so the
    /// partial line is visible before the completing glyph arrives.
    pub fn plain_no_nl(&self, msg: &str) {
        self.emit(None, msg, false);
    }

    fn emit(&self, level: Option<Level>, msg: &str, newline: bool) {
        let mut out = std::io::stdout().lock();
        let prefix = level.map_or_else(String::new, |l| paint(l.color(), l.tag(), self.color));
        // ignore broken-pipe failures on stdout
        let _ = if newline {
            writeln!(out, "{prefix}{msg}")
        } else {
            write!(out, "{prefix}{msg}").and_then(|()| out.flush())
        };
    }
}
