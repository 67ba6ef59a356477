use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging on stderr.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = i16::from(verbose) - i16::from(quiet);
    let level = match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,mapty={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Open a session file, or stdin when `path` is `-`.
pub fn open_session(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        tracing::info!("reading session from stdin");
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).with_context(|| format!("opening session: {}", path.display()))?;
    tracing::info!(path = %path.display(), "reading session file");
    Ok(Box::new(BufReader::new(file)))
}
