//! Log file setup.
//!
//! The terminal belongs to the UI, so logs only go to a file:
//! `stu.log` in the platform data directory, rotated daily.
//!
//! Filter with `STU_LOG` (same syntax as `RUST_LOG`), e.g.
//! `STU_LOG=debug` or `STU_LOG=stu_engine=debug`. Default is `warn`.
//! `STU_LOG=off` installs nothing and creates no log directory.

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "STU_LOG";

fn logs_dir() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "stu")?;
    Some(proj.data_dir().join("logs"))
}

/// True when no directive in the filter can enable any event.
fn is_silenced(filter: &EnvFilter) -> bool {
    filter.max_level_hint() == Some(LevelFilter::OFF)
}

/// Install the file subscriber. Failing to set up logging is not fatal.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    if is_silenced(&filter) {
        return;
    }

    let Some(dir) = logs_dir() else {
        return;
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: Could not initialize file logging: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(dir, "stu.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(file_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_filter_is_silenced() {
        assert!(is_silenced(&EnvFilter::new("off")));
    }

    #[test]
    fn any_enabled_directive_keeps_logging() {
        assert!(!is_silenced(&EnvFilter::new("warn")));
        assert!(!is_silenced(&EnvFilter::new("stu_engine=debug")));
        assert!(!is_silenced(&EnvFilter::new("off,stu_core=info")));
    }
}
