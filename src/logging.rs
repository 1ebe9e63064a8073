use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Routes the `log` macros into an append-only file, one line per record.
/// `RUST_LOG` overrides the default `info` level.
///
/// Logging is a side channel: if the file can't be opened, a warning goes to
/// stderr and the program runs without a logger. Returns whether a logger was installed.
pub fn init(log_file: &Path) -> bool {
    let file = match open_log_file(log_file) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            return false;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                Local::now().format(TIMESTAMP_FORMAT),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .is_ok()
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
